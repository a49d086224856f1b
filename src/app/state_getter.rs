// src/app/state_getter.rs
//! Gets the current board state and converts it to JSON for the JS host.

use std::sync::{Arc, Mutex};

use log::{error, info};
use serde::Serialize;
use wasm_bindgen::JsValue;

use crate::components::board::Board;
use crate::components::cell::Cell;

/// JS 側に渡す盤面スナップショット。
#[derive(Debug, Serialize)]
pub struct BoardStateData {
    pub remaining: usize,
    pub cells: Vec<CellStateData>,
}

/// セル 1 マス分のスナップショット。
#[derive(Debug, Serialize)]
pub struct CellStateData {
    pub col: i32,
    pub row: i32,
    pub state: &'static str,
    pub peg: Option<String>,
}

/// 盤面の状態を取得し、JSON 文字列として返します。
/// デバッグコンソールから `JSON.parse` して眺める用だよ。
pub fn board_state_json(board_arc: &Arc<Mutex<Board>>) -> Result<JsValue, JsValue> {
    let board = match board_arc.try_lock() {
        Ok(board) => board,
        Err(e) => {
            let error_msg = format!("Failed to lock board for getting state: {}", e);
            error!("{}", error_msg);
            return Err(JsValue::from_str(&error_msg));
        }
    };

    info!("Getting board state...");
    let mut cells = Vec::with_capacity(49);
    for pos in Board::positions() {
        let (state, peg) = match board.cell(pos) {
            Cell::OffBoard => ("off_board", None),
            Cell::Empty => ("empty", None),
            Cell::Occupied(peg) => ("occupied", Some(peg.element_id().to_string())),
        };
        cells.push(CellStateData {
            col: pos.col,
            row: pos.row,
            state,
            peg,
        });
    }

    let data = BoardStateData {
        remaining: board.peg_count(),
        cells,
    };
    match serde_json::to_string(&data) {
        Ok(json_string) => Ok(JsValue::from_str(&json_string)),
        Err(e) => {
            let error_msg = format!("Failed to serialize board state: {}", e);
            error!("{}", error_msg);
            Err(JsValue::from_str(&error_msg))
        }
    }
}
