// src/components/border_cursor.rs

use serde::{Deserialize, Serialize};

use crate::config::layout::{BORDER_START_ANGLE, BORDER_STEP};

/// 捕獲したボールをお皿の縁に並べていくための角度カーソルだよ！🥣
///
/// お皿の真上 (-π/2) から始めて、1 個捕獲するたびに π/18 (10度) ずつ
/// 時計回りに進んでいく。角度は単調増加で、2π を超えても折り返さない。
/// 使うときは必ず cos/sin に通すから、自然に一周してくれるんだ。
/// だから角度同士を等値比較しちゃダメだよ (一周後は別の値！)。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BorderCursor {
    angle: f64,
}

impl BorderCursor {
    pub fn new() -> Self {
        Self {
            angle: BORDER_START_ANGLE,
        }
    }

    /// 次に置くべきスロットの角度 (ラジアン)。
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// カーソルを 1 スロット分進める。捕獲 1 回につき 1 回だけ呼ぶこと！
    pub fn advance(&mut self) {
        self.angle += BORDER_STEP;
    }
}

impl Default for BorderCursor {
    fn default() -> Self {
        Self::new()
    }
}
