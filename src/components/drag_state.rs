// src/components/drag_state.rs

use serde::{Deserialize, Serialize};

/// 「表示上の位置」と「本来の位置」のズレを表す構造体だよ！🖱️➡️
///
/// SVG 要素は transform="translate(dx,dy)" で見た目だけ動かせるから、
/// 宣言上の座標 (cx, cy) と画面上の位置は一致しないことがあるんだ。
/// そのズレ (dx, dy) がこの Differential。
///
/// つかみ上げた瞬間に要素の変換行列から読み取っておいて、
/// ドロップが拒否されたらこれをそのまま適用し直す (= 元の見た目に戻す)。
/// ドロップが受理されたら、スナップ用の新しい Differential に置き換わるよ。
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Differential {
    pub dx: f64,
    pub dy: f64,
}

impl Differential {
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }
}

/// ドラッグ 1 回分 (ジェスチャ 1 回分) の状態を表す構造体だよ！
///
/// - `target_id`: 今つかんでいる要素の id。None ならアイドル状態。
/// - `grab_x` / `grab_y`: つかんだ点。真の座標からつかみ時の Differential を
///   引いた値で、ドラッグ中はずっと「真の座標 − この点」が表示オフセットになる。
///   こうすると要素の原点じゃなくて、クリックした指の位置に
///   くっついて動いてくれるんだ。自然！✨
/// - `start_differential`: つかんだ瞬間の表示ズレ。拒否時の巻き戻しと、
///   ルール側が「ボールの本当のセル」を逆算するのに使うよ。
///
/// ライフサイクル: ドロップで空にリセット → つかみで設定 →
/// ドラッグ中は読み取りのみ。途中で書き換えちゃダメ！
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DragState {
    target_id: Option<String>,
    grab_x: f64,
    grab_y: f64,
    start_differential: Differential,
}

impl DragState {
    pub fn new() -> Self {
        Self::default()
    }

    /// ドラッグ開始。つかんだ要素の id、つかんだ時点の真の座標、
    /// その瞬間の表示ズレを記録するよ。
    pub fn begin(&mut self, target_id: String, true_x: f64, true_y: f64, differential: Differential) {
        self.target_id = Some(target_id);
        self.grab_x = true_x - differential.dx;
        self.grab_y = true_y - differential.dy;
        self.start_differential = differential;
    }

    /// ドラッグ終了。アイドル状態に戻すよ。
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_dragging(&self) -> bool {
        self.target_id.is_some()
    }

    /// 今つかんでいる要素の id。
    pub fn target_id(&self) -> Option<&str> {
        self.target_id.as_deref()
    }

    /// つかんだ瞬間の表示ズレ。
    pub fn start_differential(&self) -> Differential {
        self.start_differential
    }

    /// 現在のカーソル位置 (真の座標) に対して要素へ適用すべき表示オフセット。
    pub fn drag_offset(&self, true_x: f64, true_y: f64) -> Differential {
        Differential::new(true_x - self.grab_x, true_y - self.grab_y)
    }
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_records_grab_point_minus_differential() {
        let mut drag = DragState::new();
        assert!(!drag.is_dragging());

        // 既に (5, -3) だけ表示がズレている要素を (100, 200) でつかむ
        drag.begin("ball3_1".to_string(), 100.0, 200.0, Differential::new(5.0, -3.0));

        assert!(drag.is_dragging());
        assert_eq!(drag.target_id(), Some("ball3_1"));
        assert_eq!(drag.start_differential(), Differential::new(5.0, -3.0));

        // つかんだ直後は、オフセットがつかみ時のズレと一致する
        // (= 見た目が 1 ピクセルも跳ねない！)
        assert_eq!(drag.drag_offset(100.0, 200.0), Differential::new(5.0, -3.0));

        println!("つかみ点の記録テスト、成功！🎉");
    }

    #[test]
    fn drag_offset_follows_the_pointer() {
        let mut drag = DragState::new();
        drag.begin("ball3_1".to_string(), 100.0, 200.0, Differential::default());

        // カーソルが (40, -25) 動けばオフセットも (40, -25)
        assert_eq!(drag.drag_offset(140.0, 175.0), Differential::new(40.0, -25.0));

        println!("追従オフセットテスト、成功！🎉");
    }

    #[test]
    fn clear_resets_to_idle() {
        let mut drag = DragState::new();
        drag.begin("ball3_1".to_string(), 10.0, 20.0, Differential::new(1.0, 2.0));
        drag.clear();

        assert!(!drag.is_dragging());
        assert_eq!(drag.target_id(), None);
        assert_eq!(drag.start_differential(), Differential::default());

        println!("リセットテスト、成功！🎉");
    }
}
