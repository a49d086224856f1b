// src/app/mod.rs
//! SolitaireApp の内部ロジックを役割ごとに分割して置くモジュールだよ！

pub mod drag_handler; // ドラッグの状態機械 (つかむ・追従・離す)
pub mod event_handler; // リスナーの取り付け
pub mod game_app; // wasm-bindgen で公開するアプリ本体
pub mod init_handler; // シーン構築
pub mod layout_calculator; // 格子 ↔ 画面座標の変換
pub mod state_getter; // 盤面 → JSON
pub mod svg_transform; // SVG の変換・属性まわりの低レベル操作
