// src/config/layout.rs
//! 盤面のレイアウトに関する定数を定義するよ！
//! 穴とボールの座標、お皿の半径、捕獲したボールを並べるリングなど。

use std::f64::consts::{FRAC_PI_2, PI};

pub const BALL_RADIUS: f64 = 20.0; // ボール (とそれを置く穴) の半径
pub const CELL_DX: f64 = 60.0; // 格子セル間の水平方向の間隔
pub const CELL_DY: f64 = 60.0; // 格子セル間の垂直方向の間隔
pub const BOARD_LEFT: f64 = 150.0; // 格子の左端 (col = 0 のセル中心の X 座標)
pub const BOARD_TOP: f64 = 160.0; // 格子の上端 (row = 0 のセル中心の Y 座標)

// --- お皿 (プレート) ---
pub const PLATE_CENTER_X: f64 = BOARD_LEFT + 3.0 * CELL_DX; // 盤面中央セル (3,3) の X 座標
pub const PLATE_CENTER_Y: f64 = BOARD_TOP + 3.0 * CELL_DY; // 盤面中央セル (3,3) の Y 座標
pub const PLATE_RADIUS: f64 = 12.0 * BALL_RADIUS; // 内側のお皿の半径
pub const BIG_PLATE_RADIUS: f64 = 15.0 * BALL_RADIUS; // 外側 (縁取り) のお皿の半径

// --- 捕獲したボールを並べるリング ---
pub const STORE_RADIUS: f64 = 13.5 * BALL_RADIUS; // 2 枚のお皿の間、縁に沿って並べる
pub const BORDER_START_ANGLE: f64 = -FRAC_PI_2; // 最初のボールはお皿の真上 (12時の位置)
pub const BORDER_STEP: f64 = PI / 18.0; // 1 捕獲ごとに進める角度 (10度ずつ)

// --- 色と識別子 ---
pub const BALL_COLOR: &str = "sienna"; // ボールの色
pub const PLATE_COLOR: &str = "moccasin"; // お皿の色
pub const HOLE_COLOR: &str = "white"; // 穴の色
pub const BACKDROP_ID: &str = "BackDrop"; // ドラッグイベントを拾う背景 rect の id
