// src/app/init_handler.rs
//! SolitaireApp の初期化: 背景とお皿、穴、ボールのシーン構築ロジック。

use wasm_bindgen::JsValue;
use web_sys::{Document, Element, SvgsvgElement};

use crate::app::drag_handler::DRAGGABLE_CLASS;
use crate::app::layout_calculator;
use crate::components::board::Board;
use crate::components::cell::Cell;
use crate::components::position::Position;
use crate::config::layout::{
    BACKDROP_ID, BALL_COLOR, BALL_RADIUS, BIG_PLATE_RADIUS, HOLE_COLOR, PLATE_CENTER_X,
    PLATE_CENTER_Y, PLATE_COLOR, PLATE_RADIUS,
};
use crate::log;

/// SVG の名前空間。create_element_ns に毎回渡すやつ。
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// 背景の catch-all 矩形を用意するよ。既にあればそれを使う。
///
/// この矩形がドラッグ中のイベントを受け止めるキャンバスになる。
/// マウスを素早く動かして一瞬ボールの外に出ても、イベントは背景が
/// 拾ってくれるから、ドラッグが勝手に途切れないんだ。
pub fn ensure_backdrop(document: &Document, svg_root: &SvgsvgElement) -> Result<Element, JsValue> {
    if let Some(existing) = svg_root.query_selector(&format!("#{}", BACKDROP_ID))? {
        return Ok(existing);
    }

    // 無ければ最初の子として自動で作る。ビューポートより一回り大きく！
    let backdrop = document.create_element_ns(Some(SVG_NS), "rect")?;
    backdrop.set_attribute("id", BACKDROP_ID)?;
    backdrop.set_attribute("x", "-10%")?;
    backdrop.set_attribute("y", "-10%")?;
    backdrop.set_attribute("width", "110%")?;
    backdrop.set_attribute("height", "110%")?;
    backdrop.set_attribute("fill", "none")?;
    backdrop.set_attribute("pointer-events", "all")?;
    svg_root.insert_before(&backdrop, svg_root.first_child().as_ref())?;
    Ok(backdrop)
}

/// 盤面の見た目を組み立てるよ。お皿 2 枚、穴 33 個、ボール 32 個！
///
/// 描画順が大事: お皿 → 穴 → ボール。SVG は後に追加した要素ほど
/// 上に描かれるからね。id は盤面側のヘルパー (`hole_id` / `peg_id`) と
/// 必ず一致させること。ドロップ判定もボール検索も id 頼みだから！
pub fn build_scene(
    document: &Document,
    svg_root: &SvgsvgElement,
    board: &Board,
) -> Result<(), JsValue> {
    let plate_center = Position::new(PLATE_CENTER_X, PLATE_CENTER_Y);
    let plate_style = format!("fill:{};stroke:{}", PLATE_COLOR, BALL_COLOR);
    attach_circle(document, svg_root, None, plate_center, BIG_PLATE_RADIUS, &plate_style, None)?;
    attach_circle(document, svg_root, None, plate_center, PLATE_RADIUS, &plate_style, None)?;

    let hole_style = format!("fill:{};stroke:{}", HOLE_COLOR, BALL_COLOR);
    let ball_style = format!("fill:{}", BALL_COLOR);
    for pos in Board::positions() {
        let cell = board.cell(pos);
        if matches!(cell, Cell::OffBoard) {
            continue;
        }
        let center = layout_calculator::cell_position(pos);
        attach_circle(
            document,
            svg_root,
            Some(&Board::hole_id(pos)),
            center,
            BALL_RADIUS,
            &hole_style,
            None,
        )?;
        if let Cell::Occupied(peg) = cell {
            attach_circle(
                document,
                svg_root,
                Some(peg.element_id()),
                center,
                BALL_RADIUS,
                &ball_style,
                Some(DRAGGABLE_CLASS),
            )?;
        }
    }

    log("Scene built: 2 plates, the holes and the starting balls.");
    Ok(())
}

/// circle 要素を 1 個作って SVG ルートにぶら下げるヘルパー。
fn attach_circle(
    document: &Document,
    svg_root: &SvgsvgElement,
    id: Option<&str>,
    center: Position,
    radius: f64,
    style: &str,
    class: Option<&str>,
) -> Result<Element, JsValue> {
    let circle = document.create_element_ns(Some(SVG_NS), "circle")?;
    if let Some(id) = id {
        circle.set_attribute("id", id)?;
    }
    circle.set_attribute("cx", &center.x.to_string())?;
    circle.set_attribute("cy", &center.y.to_string())?;
    circle.set_attribute("r", &radius.to_string())?;
    circle.set_attribute("style", style)?;
    if let Some(class) = class {
        circle.set_attribute("class", class)?;
    }
    svg_root.append_child(&circle)?;
    Ok(circle)
}
