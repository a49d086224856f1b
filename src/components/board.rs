// src/components/board.rs

use itertools::iproduct;
use serde::{Deserialize, Serialize};

use crate::components::cell::{Cell, PegId};
use crate::components::grid::GridPos;

/// 盤面の一辺のセル数。7×7 の十字盤だよ。
pub const BOARD_SIZE: usize = 7;

/// 穴の SVG 要素 id の接頭辞。ドロップ先の判定はこの接頭辞で行うよ。
pub const HOLE_ID_PREFIX: &str = "hole";
/// ボールの SVG 要素 id の接頭辞。
pub const PEG_ID_PREFIX: &str = "ball";

// 範囲外アクセス時に参照で返すための番人。
// OffBoard はデータを持たないバリアントだから const にできるんだ。
const OFF_BOARD: Cell = Cell::OffBoard;

/// 7×7 のセル状態マッピングを管理する、盤面の中心的な構造体だよ！🎯
///
/// 添字は元のレイアウト定義に合わせて `[col][row]` の順。
/// 十字の外のセルは常に `OffBoard` で、`take_peg` / `place_peg` の
/// 対象には絶対にならない。盤面を書き換えられるのはルール側
/// (`logic::rules::apply_jump`) だけ、っていう約束で運用するよ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// 標準のイギリス式 33 穴レイアウトで盤面を作るよ！
    ///
    /// 中央の 3 列・3 行が十字を成していて、真ん中のセル (3,3) だけが
    /// 空いた状態からゲームが始まる。ボールは 32 個。
    pub fn standard_layout() -> Self {
        let cells = std::array::from_fn(|col| {
            std::array::from_fn(|row| {
                let pos = GridPos::new(col as i32, row as i32);
                if !Self::in_cross(pos) {
                    Cell::OffBoard
                } else if col == 3 && row == 3 {
                    Cell::Empty
                } else {
                    Cell::Occupied(Self::peg_id(pos))
                }
            })
        });
        Self { cells }
    }

    /// そのセルが十字形の内側 (盤面上) かどうか。
    /// 列か行のどちらかが中央の帯 (2..=4) に入っていれば十字の内側だよ。
    fn in_cross(pos: GridPos) -> bool {
        let size = BOARD_SIZE as i32;
        if !(0..size).contains(&pos.col) || !(0..size).contains(&pos.row) {
            return false;
        }
        (2..=4).contains(&pos.col) || (2..=4).contains(&pos.row)
    }

    /// 盤面の全セル番地を (col, row) の順で列挙するイテレータ。
    pub fn positions() -> impl Iterator<Item = GridPos> {
        let size = BOARD_SIZE as i32;
        iproduct!(0..size, 0..size).map(|(col, row)| GridPos::new(col, row))
    }

    /// セルの状態を取得する。7×7 の範囲外は盤外扱いで `OffBoard` を返すよ。
    /// 画面座標から逆算した番地をそのまま渡しても安全！
    pub fn cell(&self, pos: GridPos) -> &Cell {
        let size = BOARD_SIZE as i32;
        if (0..size).contains(&pos.col) && (0..size).contains(&pos.row) {
            &self.cells[pos.col as usize][pos.row as usize]
        } else {
            &OFF_BOARD
        }
    }

    /// 着地先になれるセルか (穴があって空いてる)。盤外は false。
    pub fn is_empty(&self, pos: GridPos) -> bool {
        self.cell(pos).is_empty()
    }

    /// ボールが乗っているセルか。盤外は false。
    pub fn is_occupied(&self, pos: GridPos) -> bool {
        self.cell(pos).is_occupied()
    }

    /// セルに乗っているボールのハンドルを返す。
    pub fn peg_at(&self, pos: GridPos) -> Option<&PegId> {
        self.cell(pos).peg()
    }

    /// セルからボールを取り除いて返す。セルは `Empty` になるよ。
    /// ボールが乗っていないセル (空・盤外) に対しては何もせず None。
    pub fn take_peg(&mut self, pos: GridPos) -> Option<PegId> {
        let size = BOARD_SIZE as i32;
        if !(0..size).contains(&pos.col) || !(0..size).contains(&pos.row) {
            return None;
        }
        let cell = &mut self.cells[pos.col as usize][pos.row as usize];
        match std::mem::replace(cell, Cell::Empty) {
            Cell::Occupied(peg) => Some(peg),
            // Occupied 以外だったら取り出すものがないので、状態を元に戻す。
            // (OffBoard を Empty に化けさせたら大事故！)
            other => {
                *cell = other;
                None
            }
        }
    }

    /// 空きセルにボールを置く。置けたら true。
    /// 空きセル以外 (盤外・ボールあり) には置けず false を返すよ。
    pub fn place_peg(&mut self, pos: GridPos, peg: PegId) -> bool {
        let size = BOARD_SIZE as i32;
        if !(0..size).contains(&pos.col) || !(0..size).contains(&pos.row) {
            return false;
        }
        let cell = &mut self.cells[pos.col as usize][pos.row as usize];
        if cell.is_empty() {
            *cell = Cell::Occupied(peg);
            true
        } else {
            false
        }
    }

    /// 盤面に残っているボールの数を数える。終局判定のお供。
    pub fn peg_count(&self) -> usize {
        Self::positions()
            .filter(|&pos| self.is_occupied(pos))
            .count()
    }

    /// セル番地からボール要素の id を作る。例: (3,2) → "ball3_2"
    pub fn peg_id(pos: GridPos) -> PegId {
        PegId(format!("{}{}_{}", PEG_ID_PREFIX, pos.col, pos.row))
    }

    /// セル番地から穴要素の id を作る。例: (3,2) → "hole3_2"
    pub fn hole_id(pos: GridPos) -> String {
        format!("{}{}_{}", HOLE_ID_PREFIX, pos.col, pos.row)
    }
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_layout_shape() {
        let board = Board::standard_layout();

        // イギリス式: 穴 33 個、ボール 32 個、真ん中だけ空き
        assert_eq!(board.peg_count(), 32, "Standard board should start with 32 pegs");
        assert!(board.is_empty(GridPos::new(3, 3)), "Center cell should start empty");

        // 四隅の 2×2 ブロックは盤外
        assert_eq!(*board.cell(GridPos::new(0, 0)), Cell::OffBoard);
        assert_eq!(*board.cell(GridPos::new(6, 6)), Cell::OffBoard);
        assert_eq!(*board.cell(GridPos::new(1, 5)), Cell::OffBoard);

        // 十字の腕の先端にはボールがある
        assert!(board.is_occupied(GridPos::new(3, 0)));
        assert!(board.is_occupied(GridPos::new(0, 3)));

        // 7×7 の範囲外も盤外扱い
        assert_eq!(*board.cell(GridPos::new(-1, 3)), Cell::OffBoard);
        assert_eq!(*board.cell(GridPos::new(3, 7)), Cell::OffBoard);

        println!("標準レイアウトテスト、成功！🎉");
    }

    #[test]
    fn take_and_place_respect_cell_states() {
        let mut board = Board::standard_layout();
        let corner = GridPos::new(0, 0); // 盤外
        let center = GridPos::new(3, 3); // 空き
        let armtip = GridPos::new(3, 0); // ボールあり

        // 盤外からは取れないし、置けもしない
        assert_eq!(board.take_peg(corner), None);
        assert!(!board.place_peg(corner, PegId("ball9_9".to_string())));
        assert_eq!(*board.cell(corner), Cell::OffBoard, "OffBoard must stay OffBoard");

        // 空きセルからも取れない
        assert_eq!(board.take_peg(center), None);
        assert!(board.is_empty(center));

        // ボールは取り出せて、セルは空きになる
        let peg = board.take_peg(armtip).expect("ball3_0 should be there");
        assert_eq!(peg.element_id(), "ball3_0");
        assert!(board.is_empty(armtip));

        // 空いたところには置ける。ボールの上には置けない。
        assert!(board.place_peg(center, peg.clone()));
        assert!(!board.place_peg(center, peg));
        assert_eq!(board.peg_count(), 32, "Take + place should keep the peg count");

        println!("take_peg / place_peg テスト、成功！🎉");
    }

    #[test]
    fn id_helpers_match_layout_naming() {
        let pos = GridPos::new(3, 2);
        assert_eq!(Board::peg_id(pos).element_id(), "ball3_2");
        assert_eq!(Board::hole_id(pos), "hole3_2");
        println!("id ヘルパーテスト、成功！🎉");
    }
}
