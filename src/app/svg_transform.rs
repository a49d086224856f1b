// src/app/svg_transform.rs
//! Low-level SVG interactions: transform reads/writes, pan/zoom compensation,
//! pointer-event routing and cursor feedback.
//!
//! ここだけが web-sys の SVG API に直接触るよ。上の層 (ドラッグ処理やルール)
//! は全部この小さな関数たちを経由するんだ。

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, MouseEvent, SvgElement, SvgGraphicsElement, SvgsvgElement};

use crate::components::drag_state::Differential;
use crate::components::position::Position;

/// 要素の「表示上の位置」と「本来の位置」のズレを、現在の変換行列から読み取るよ。
///
/// 要素が SVGGraphicsElement じゃなかったり、行列がまだ無かったり
/// (描画前にドラッグされた等) したら Err。つかみ処理側はこのエラーで
/// ドラッグを中止すること！ズレを勝手に (0,0) 扱いすると、スナップ済みの
/// ボールをつかんだ瞬間に画面上で跳ねちゃうからね。
pub fn differential(element: &Element) -> Result<Differential, JsValue> {
    let graphics = element
        .dyn_ref::<SvgGraphicsElement>()
        .ok_or_else(|| JsValue::from_str("Element is not an SVGGraphicsElement"))?;
    let matrix = graphics
        .get_ctm()
        .ok_or_else(|| JsValue::from_str("Element has no current transformation matrix"))?;
    Ok(Differential::new(matrix.e() as f64, matrix.f() as f64))
}

/// マウスイベントの生座標を、シーンの論理座標に変換するよ。
///
/// find the current zoom level and pan setting, and adjust the reported
/// mouse position accordingly.
/// パンとズームはいつ変わるか分からないから、イベントのたびに
/// 必ず読み直すこと！キャッシュしちゃダメ。
pub fn true_coords(svg_root: &SvgsvgElement, event: &MouseEvent) -> Position {
    let scale = svg_root.current_scale() as f64;
    let translation = svg_root.current_translate();
    Position::new(
        (event.client_x() as f64 - translation.x() as f64) / scale,
        (event.client_y() as f64 - translation.y() as f64) / scale,
    )
}

/// 要素の表示変換を translate(x,y) に置き換えるよ。見た目だけ動く！
/// 宣言上の座標 (cx/cy) はそのまま残るのがミソ。
pub fn apply_translation(element: &Element, x: f64, y: f64) -> Result<(), JsValue> {
    element.set_attribute("transform", &format!("translate({},{})", x, y))
}

/// 要素のポインタイベント参加を切り替えるよ。
///
/// ドラッグ中の要素を "none" にしておくと、mousemove / mouseup の
/// ターゲットがドラッグ中の要素自身じゃなくて「その下にあるもの」になる。
/// ドロップ先の検出はこの仕掛けで成り立ってるんだ。賢いっしょ？😎
pub fn set_pointer_events(element: &Element, enabled: bool) -> Result<(), JsValue> {
    element.set_attribute("pointer-events", if enabled { "all" } else { "none" })
}

/// 要素を兄弟の一番上 (描画順の最後) に移動するよ。
/// ドラッグ中のボールが他の要素の下に潜らないように。
pub fn raise_to_top(element: &Element) -> Result<(), JsValue> {
    if let Some(parent) = element.parent_node() {
        parent.append_child(element)?;
    }
    Ok(())
}

/// カーソルの見た目を変えるよ。SVG 要素以外が来たら黙って何もしない。
pub fn set_cursor(element: &Element, cursor: &str) {
    if let Some(svg_element) = element.dyn_ref::<SvgElement>() {
        let _ = svg_element.style().set_property("cursor", cursor);
    }
}

/// circle 要素の宣言上の中心 (cx, cy 属性) を読むよ。
/// 表示変換は含まない、「本来の位置」そのもの。
/// cx / cy が無い要素や数値じゃない値なら None。
pub fn circle_center(element: &Element) -> Option<Position> {
    let cx = element.get_attribute("cx")?.parse().ok()?;
    let cy = element.get_attribute("cy")?.parse().ok()?;
    Some(Position::new(cx, cy))
}
