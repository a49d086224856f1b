// src/components/grid.rs

use serde::{Deserialize, Serialize};

/// 7×7 盤面上のセルの番地を表す構造体だよ！ (col, row) の組。🗺️
///
/// 画面座標 (`Position`) とは別の型にしてあるのがポイント！
/// 「何列目・何行目」と「画面上の何ピクセル」を型レベルで区別しておくと、
/// 取り違えバグをコンパイラが防いでくれるんだ。👍
///
/// `i32` なのは、画面座標からの逆算で一時的に負の値や 7 以上の値が
/// 出てくる可能性があるから。盤面の外は `Board` 側が `OffBoard` として
/// 扱ってくれるので、ここでは範囲チェックはしないよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub col: i32,
    pub row: i32,
}

impl GridPos {
    pub fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// このセルから (dc, dr) だけずらしたセルの番地を返す。
    /// ジャンプ判定で「隣のセル」「2 つ先のセル」を見るときに使うよ。
    pub fn offset(self, dc: i32, dr: i32) -> Self {
        Self {
            col: self.col + dc,
            row: self.row + dr,
        }
    }
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_moves_in_each_direction() {
        let pos = GridPos::new(3, 3);

        assert_eq!(pos.offset(0, -1), GridPos::new(3, 2)); // 上
        assert_eq!(pos.offset(0, 2), GridPos::new(3, 5)); // 下に 2 つ
        assert_eq!(pos.offset(-2, 0), GridPos::new(1, 3)); // 左に 2 つ
        assert_eq!(pos.offset(1, 0), GridPos::new(4, 3)); // 右

        // 盤面の外に出る番地も作れる (判定は Board の仕事)
        assert_eq!(GridPos::new(0, 0).offset(-1, 0), GridPos::new(-1, 0));

        println!("GridPos オフセットテスト、成功！🎉");
    }
}
