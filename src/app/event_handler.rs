// src/app/event_handler.rs
//! Attaches the pointer-event listeners that drive the drag state machine.
//!
//! リスナーは SVG ルートに付けるよ。ドラッグ中の要素はポインタイベントを
//! 切ってあるから、mousemove / mouseup はルートまで上がってきて、
//! event.target には「カーソルの下にあるもの」が入ってるんだ。

use std::sync::{Arc, Mutex};

use log::error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, MouseEvent, SvgsvgElement};

use crate::app::drag_handler::{self, DragRules};
use crate::components::drag_state::DragState;
use crate::log;

/// イベントのターゲットを Element として取り出すよ。
/// ターゲットが無かったり Element じゃなかったりしたら None。
pub fn event_target_element(event: &MouseEvent) -> Option<Element> {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
}

/// ドラッグ＆ドロップに必要な 4 本のリスナーを SVG ルートに付けるよ。
///
/// - mousedown: つかむ
/// - mousemove: 追従 (ドラッグ本体)
/// - mousemove: カーソルの見た目更新 (mouseover は新しい図形に入った
///   一度しか発火しないから、こっちも mousemove で拾うんだ)
/// - mouseup: ドロップ
///
/// 作ったクロージャは `event_closures` に保存して生かしておく。
/// ここで drop しちゃうと、JS 側から呼ばれた瞬間にパニックするからね！
pub fn attach_board_listeners<R: DragRules + 'static>(
    document: &Document,
    svg_root: &SvgsvgElement,
    rules_arc: &Arc<Mutex<R>>,
    drag_arc: &Arc<Mutex<DragState>>,
    event_closures: &Arc<Mutex<Vec<Closure<dyn FnMut(Event)>>>>,
) -> Result<(), JsValue> {
    let mut closures = event_closures
        .lock()
        .map_err(|_| JsValue::from_str("Failed to lock the closure store"))?;

    // --- mousedown: つかむ ---
    {
        let rules = Arc::clone(rules_arc);
        let drag = Arc::clone(drag_arc);
        let root = svg_root.clone();
        let closure = Closure::wrap(Box::new(move |event: Event| {
            match event.dyn_into::<MouseEvent>() {
                Ok(mouse_event) => drag_handler::handle_grab(&rules, &drag, &root, &mouse_event),
                Err(_) => error!("Failed to cast event to MouseEvent in mousedown listener"),
            }
        }) as Box<dyn FnMut(Event)>);
        svg_root.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())?;
        closures.push(closure);
    }

    // --- mousemove: ドラッグ追従 ---
    {
        let drag = Arc::clone(drag_arc);
        let doc = document.clone();
        let root = svg_root.clone();
        let closure = Closure::wrap(Box::new(move |event: Event| {
            match event.dyn_into::<MouseEvent>() {
                Ok(mouse_event) => drag_handler::handle_drag(&drag, &doc, &root, &mouse_event),
                Err(_) => error!("Failed to cast event to MouseEvent in mousemove listener"),
            }
        }) as Box<dyn FnMut(Event)>);
        svg_root.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
        closures.push(closure);
    }

    // --- mousemove: カーソルの見た目更新 ---
    {
        let rules = Arc::clone(rules_arc);
        let drag = Arc::clone(drag_arc);
        let doc = document.clone();
        let closure = Closure::wrap(Box::new(move |event: Event| {
            match event.dyn_into::<MouseEvent>() {
                Ok(mouse_event) => {
                    drag_handler::handle_hover_cursor(&rules, &drag, &doc, &mouse_event)
                }
                Err(_) => error!("Failed to cast event to MouseEvent in cursor listener"),
            }
        }) as Box<dyn FnMut(Event)>);
        svg_root.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
        closures.push(closure);
    }

    // --- mouseup: ドロップ ---
    {
        let rules = Arc::clone(rules_arc);
        let drag = Arc::clone(drag_arc);
        let doc = document.clone();
        let closure = Closure::wrap(Box::new(move |event: Event| {
            match event.dyn_into::<MouseEvent>() {
                Ok(mouse_event) => drag_handler::handle_drop(&rules, &drag, &doc, &mouse_event),
                Err(_) => error!("Failed to cast event to MouseEvent in mouseup listener"),
            }
        }) as Box<dyn FnMut(Event)>);
        svg_root.add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref())?;
        closures.push(closure);
    }

    log("Attached board listeners (mousedown, mousemove x2, mouseup).");
    Ok(())
}
