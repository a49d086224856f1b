// src/app/layout_calculator.rs
//! Calculates screen positions for grid cells and capture rim slots.

use crate::components::grid::GridPos;
use crate::components::position::Position;
use crate::config::layout::{
    BOARD_LEFT, BOARD_TOP, CELL_DX, CELL_DY, PLATE_CENTER_X, PLATE_CENTER_Y, STORE_RADIUS,
};

/// セル番地から画面座標 (セル中心) を計算します。
///
/// # 引数
/// * `pos`: 盤面上のセル番地。
///
/// # 戻り値
/// * そのセルの中心の `Position`。
pub fn cell_position(pos: GridPos) -> Position {
    Position::new(
        BOARD_LEFT + pos.col as f64 * CELL_DX,
        BOARD_TOP + pos.row as f64 * CELL_DY,
    )
}

/// 画面座標からセル番地を逆算します。`cell_position` の逆写像。
///
/// 小数部は 0 方向へ切り捨て。穴もボールも中心座標が間隔のちょうど
/// 整数倍に置かれているから、宣言上の中心を渡す限り誤差は出ないよ。
pub fn grid_at(x: f64, y: f64) -> GridPos {
    GridPos::new(
        ((x - BOARD_LEFT) / CELL_DX) as i32,
        ((y - BOARD_TOP) / CELL_DY) as i32,
    )
}

/// お皿の縁、角度 `angle` のスロットの画面座標を計算します。
/// 捕獲したボールの置き場所。`center + store_radius * (cosθ, sinθ)` だよ。
pub fn rim_slot(angle: f64) -> Position {
    Position::new(
        PLATE_CENTER_X + STORE_RADIUS * angle.cos(),
        PLATE_CENTER_Y + STORE_RADIUS * angle.sin(),
    )
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::board::Board;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn cell_position_matches_the_layout_constants() {
        // 原点セル
        assert_eq!(cell_position(GridPos::new(0, 0)), Position::new(150.0, 160.0));
        // 初手で動かすボールのセル (3,1)
        assert_eq!(cell_position(GridPos::new(3, 1)), Position::new(330.0, 220.0));
        // 盤面中央はお皿の中心と一致する
        assert_eq!(cell_position(GridPos::new(3, 3)), Position::new(330.0, 340.0));

        println!("セル座標テスト、成功！🎉");
    }

    #[test]
    fn grid_round_trip_is_identity_on_the_whole_grid() {
        for pos in Board::positions() {
            let screen = cell_position(pos);
            assert_eq!(grid_at(screen.x, screen.y), pos, "Round trip failed for {:?}", pos);
        }
        println!("格子往復テスト、成功！🎉");
    }

    #[test]
    fn first_rim_slot_is_straight_above_the_plate() {
        let slot = rim_slot(-FRAC_PI_2);

        // 真上: X はお皿の中心、Y は中心からリング半径だけ上
        assert!((slot.x - 330.0).abs() < 1e-9);
        assert!((slot.y - (340.0 - 270.0)).abs() < 1e-9);

        println!("リングスロットテスト、成功！🎉");
    }
}
