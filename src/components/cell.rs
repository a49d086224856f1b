// src/components/cell.rs

use serde::{Deserialize, Serialize};

/// 盤面上のボール 1 個を指すハンドルだよ！🔖
///
/// 中身はそのボールの SVG 要素の id (例: "ball3_2")。
/// 要素そのものを持たずに id だけ持っておいて、必要になったら
/// `document.get_element_by_id` で引き直すスタイル。シーン側が要素を
/// 所有していて、こっちは借りてるだけ、っていう関係がはっきりするんだ。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PegId(pub String);

impl PegId {
    /// SVG 要素の id としての文字列を返す。
    pub fn element_id(&self) -> &str {
        &self.0
    }
}

/// 盤面のセル 1 マスの状態を表す列挙型だよ！
///
/// `Option<PegId>` でごまかさずに 3 状態をきっちり分けてるのが大事なところ！
/// 「十字の外 (そもそも盤面じゃない)」と「穴はあるけど空いてる」は
/// 全然違う意味だからね。ジャンプ判定で取り違えると悲惨なことになる…。😱
///
/// - `OffBoard`: 十字の外。永久に不活性で、どんな操作の対象にもならない。
/// - `Empty`: 穴はあるけどボールが乗ってない。ジャンプの着地先になれる。
/// - `Occupied`: ボールが乗ってる。ドラッグ元にも、捕獲対象にもなれる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    OffBoard,
    Empty,
    Occupied(PegId),
}

impl Cell {
    /// ボールの着地先になれるセルかどうか (穴があって空いてる)。
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// ボールが乗っているセルかどうか。
    pub fn is_occupied(&self) -> bool {
        matches!(self, Cell::Occupied(_))
    }

    /// 乗っているボールのハンドルを返す。空や盤外なら None。
    pub fn peg(&self) -> Option<&PegId> {
        match self {
            Cell::Occupied(peg) => Some(peg),
            _ => None,
        }
    }
}
