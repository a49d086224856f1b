// src/app/game_app.rs

// --- 必要なものをインポート ---
use std::sync::{Arc, Mutex};

use js_sys::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, SvgsvgElement};

use crate::app::{event_handler, init_handler, state_getter};
use crate::components::board::Board;
use crate::components::drag_state::DragState;
use crate::log;
use crate::logic::solitaire::SolitaireRules;

// --- ゲーム全体のアプリケーション状態を管理する構造体 ---
#[wasm_bindgen]
pub struct SolitaireApp {
    board: Arc<Mutex<Board>>,
    rules: Arc<Mutex<SolitaireRules>>,
    drag: Arc<Mutex<DragState>>,
    // イベントリスナーのクロージャを保持する Vec。
    // Arc<Mutex<>> で囲むことで、&self からでも変更可能にし、
    // スレッドセーフにする (Wasm は基本シングルスレッドだけど作法として)
    event_closures: Arc<Mutex<Vec<Closure<dyn FnMut(Event)>>>>,
    document: Document,
    svg_root: SvgsvgElement,
}

// SolitaireApp 構造体のメソッドを実装していくよ！
#[wasm_bindgen]
impl SolitaireApp {
    /// ホストの HTML にある `<svg>` 要素の id を受け取って初期化するよ。
    /// 典型的には JS 側から `new SolitaireApp("board")` って呼ぶ感じ！
    #[wasm_bindgen(constructor)]
    pub fn new(svg_id: &str) -> Result<SolitaireApp, JsValue> {
        log(&format!("SolitaireApp: Initializing on <svg id=\"{}\">...", svg_id));

        let window = web_sys::window().ok_or_else(|| Error::new("No window available"))?;
        let document = window
            .document()
            .ok_or_else(|| Error::new("No document available"))?;
        let svg_root = document
            .get_element_by_id(svg_id)
            .ok_or_else(|| Error::new(&format!("No element with id '{}'", svg_id)))?
            .dyn_into::<SvgsvgElement>()
            .map_err(|_| Error::new(&format!("Element '{}' is not an <svg> element", svg_id)))?;

        // 盤面はルールと状態取得で共有するから Arc で包む
        let board = Arc::new(Mutex::new(Board::standard_layout()));
        let rules = Arc::new(Mutex::new(SolitaireRules::new(
            Arc::clone(&board),
            document.clone(),
        )));

        log("SolitaireApp: Initialization complete.");
        Ok(Self {
            board,
            rules,
            drag: Arc::new(Mutex::new(DragState::new())),
            event_closures: Arc::new(Mutex::new(Vec::new())),
            document,
            svg_root,
        })
    }

    /// シーンを組み立てて、リスナーを張って、遊べる状態にするよ！
    pub fn start(&self) -> Result<(), JsValue> {
        init_handler::ensure_backdrop(&self.document, &self.svg_root)?;
        {
            let board = self
                .board
                .lock()
                .map_err(|e| JsValue::from_str(&format!("Failed to lock board: {}", e)))?;
            init_handler::build_scene(&self.document, &self.svg_root, &board)?;
        }
        event_handler::attach_board_listeners(
            &self.document,
            &self.svg_root,
            &self.rules,
            &self.drag,
            &self.event_closures,
        )?;
        log("SolitaireApp: Board is ready to play!");
        Ok(())
    }

    // デバッグ用: 盤面の状態を JSON で取得
    #[wasm_bindgen]
    pub fn board_state_json(&self) -> Result<JsValue, JsValue> {
        state_getter::board_state_json(&self.board)
    }

    // デバッグ用: 残りボール数を取得
    #[wasm_bindgen]
    pub fn remaining_pegs(&self) -> Result<u32, JsValue> {
        let board = self
            .board
            .try_lock()
            .map_err(|e| JsValue::from_str(&format!("Failed to lock board: {}", e)))?;
        Ok(board.peg_count() as u32)
    }
}
