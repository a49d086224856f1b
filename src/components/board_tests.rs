// src/components/board_tests.rs
// Board のユニットテスト！ (wasm 実行用)
#![cfg(target_arch = "wasm32")]

// 親モジュール経由で Board まわりの型を全部インポート！
use super::board::*;
use super::cell::{Cell, PegId};
use super::grid::GridPos;
// テストランナーは wasm-bindgen-test を使うよ！
use wasm_bindgen_test::*;

// --- テスト関数たち ---
// 各テスト関数には #[wasm_bindgen_test] アトリビュートを付けるよ！

#[wasm_bindgen_test]
fn test_standard_layout_cell_census() {
    let board = Board::standard_layout();

    let mut off_board = 0;
    let mut empty = 0;
    let mut occupied = 0;
    for pos in Board::positions() {
        match board.cell(pos) {
            Cell::OffBoard => off_board += 1,
            Cell::Empty => empty += 1,
            Cell::Occupied(_) => occupied += 1,
        }
    }

    assert_eq!(off_board, 16, "Four 2x2 corner blocks are off the cross");
    assert_eq!(empty, 1, "Only the center starts empty");
    assert_eq!(occupied, 32, "Every other on-board cell starts with a peg");
    println!("test_standard_layout_cell_census: PASSED ✅");
}

#[wasm_bindgen_test]
fn test_every_starting_peg_has_a_unique_id() {
    let board = Board::standard_layout();

    let mut ids: Vec<String> = Board::positions()
        .filter_map(|pos| board.peg_at(pos).map(|peg| peg.element_id().to_string()))
        .collect();
    ids.sort();
    let before = ids.len();
    ids.dedup();

    assert_eq!(before, 32, "32 starting pegs expected");
    assert_eq!(ids.len(), before, "Peg element ids must not collide");
    assert!(ids.iter().all(|id| id.starts_with(PEG_ID_PREFIX)));
    println!("test_every_starting_peg_has_a_unique_id: PASSED ✅");
}

#[wasm_bindgen_test]
fn test_take_peg_is_symmetric_with_place_peg() {
    let mut board = Board::standard_layout();
    let from = GridPos::new(3, 1);
    let to = GridPos::new(3, 3);

    let peg = board.take_peg(from).expect("peg at (3,1)");
    assert!(board.is_empty(from));
    assert!(board.place_peg(to, peg.clone()));
    assert_eq!(board.peg_at(to), Some(&peg));

    // 同じところからもう一度は取れない
    assert_eq!(board.take_peg(from), None);
    println!("test_take_peg_is_symmetric_with_place_peg: PASSED ✅");
}

#[wasm_bindgen_test]
fn test_off_board_is_immutable() {
    let mut board = Board::standard_layout();
    let corner = GridPos::new(6, 0);

    assert_eq!(board.take_peg(corner), None);
    assert!(!board.place_peg(corner, PegId("ball0_0".to_string())));
    assert_eq!(*board.cell(corner), Cell::OffBoard);
    println!("test_off_board_is_immutable: PASSED ✅");
}
