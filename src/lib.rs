// src/lib.rs

// WASM と JavaScript を繋ぐための基本！
use wasm_bindgen::prelude::*;

// 自分で作ったモジュールたち！ これでコードを整理してるんだ。
pub mod app; // アプリ本体とイベント・ドラッグ処理
pub mod components; // 盤面やドラッグの状態を表すデータ型
pub mod config; // レイアウト定数
pub mod logic; // ルール判定

// アプリ本体はモジュールの奥にあるけど、JS 側からは
// `new SolitaireApp("board")` で直接使いたいから再エクスポート！
pub use app::game_app::SolitaireApp;

// JavaScript の console.log / console.error を Rust から呼び出すための準備 (extern ブロック)。
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    pub fn log(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = error)]
    pub fn error(s: &str);
}

// main 関数の代わりに、Wasm がロードされた時に最初に実行される関数だよ。
#[wasm_bindgen(start)]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
    log("Panic hook set!");
}
