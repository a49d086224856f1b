// src/components/position.rs

// serde を使う宣言！位置情報を JSON にして JS 側に渡したりするかも！
use serde::{Deserialize, Serialize};

/// 画面上の位置を表す構造体だよ！ (x, y) 座標を持つよ。📍
///
/// 穴の中心だったり、捕獲したボールの移動先だったり、
/// いろんな場面でこの型を使い回すことになると思う！汎用性高い！✨
///
/// 座標の型は `f64` にしてるよ。SVG の座標はズーム倍率で割ったりして
/// 小数になるから、整数 (`i32`) じゃなくて浮動小数点数が必要なんだ。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_position() {
        let pos = Position::new(100.5, -50.0);

        // 値がちゃんと設定されてるか確認
        assert_eq!(pos.x, 100.5);
        assert_eq!(pos.y, -50.0);

        // 比較がちゃんとできるか確認
        let pos_same = Position::new(100.5, -50.0);
        let pos_different = Position::new(0.0, 0.0);
        assert_eq!(pos, pos_same);
        assert_ne!(pos, pos_different);

        println!("作成した位置: {:?}", pos);
        println!("Position 作成テスト、成功！🎉");
    }
}
