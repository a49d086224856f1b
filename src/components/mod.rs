// src/components/mod.rs

// この components モジュールに属するサブモジュールを宣言するよ！
// 盤面の状態・ドラッグの状態・座標、ゲームを構成するデータは全部ここ。
pub mod board; // 7×7 の盤面マッピング 🎯
pub mod border_cursor; // 捕獲ボールを並べる角度カーソル 🥣
pub mod cell; // セルの状態 (盤外/空き/ボールあり)
pub mod drag_state; // ドラッグ 1 回分の状態 🖱️
pub mod grid; // 盤面上のセル番地 🗺️
pub mod position; // 画面上の座標 📍

// Board まわりのテストは隣の board_tests.rs に分けてあるよ。
#[cfg(test)]
mod board_tests;

// よく使う型は components:: 直下から使えるように再エクスポート！
pub use board::Board;
pub use border_cursor::BorderCursor;
pub use cell::{Cell, PegId};
pub use drag_state::{DragState, Differential};
pub use grid::GridPos;
pub use position::Position;
