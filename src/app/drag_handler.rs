// src/app/drag_handler.rs
//! Handles the drag gesture state machine (grab, move, hover cursor, drop).
//!
//! SVG には ネイティブの Drag API が無いから、mousedown / mousemove /
//! mouseup を組み合わせてドラッグ＆ドロップを自前でシミュレートするよ。
//! ルール側 (つかめる？置ける？置いたらどうなる？) は `DragRules`
//! トレイト越しにしか見ない。このモジュールは具体的なゲームを知らない！

use std::sync::{Arc, Mutex};

use log::{error, warn};
use web_sys::{Document, Element, MouseEvent, SvgsvgElement};

use crate::app::event_handler;
use crate::app::svg_transform;
use crate::components::drag_state::{DragState, Differential};
use crate::config::layout::BACKDROP_ID;
use crate::log;

/// 「生きてるボール」に付けるクラス名。捕獲されたら外されるよ。
pub const DRAGGABLE_CLASS: &str = "draggable";

/// ドラッグ＆ドロップのカスタマイズフックをまとめたトレイトだよ！🎣
///
/// 3 つのフックでゲーム側の方針を注入する:
/// - `draggable`: その要素をつかんでいい？
/// - `droppable`: その要素の上で離していい？
/// - `on_drop`: 受理されたドロップの後始末。スナップ用の表示ズレを
///   返せば、コントローラがそれを最終位置として適用してくれる。
///
/// デフォルト実装は「draggable クラスが付いていれば何でもつかめて、
/// どこにでも置ける」。ルール無しの素の盤として使う時の挙動だよ。
pub trait DragRules {
    /// この要素はつかんでいい？
    fn draggable(&self, element: &Element) -> bool {
        element.class_list().contains(DRAGGABLE_CLASS)
    }

    /// つかんでいる要素を、この要素の上で離していい？
    /// `drag` からはつかみ時の表示ズレが読める (ルールが真のセルを
    /// 逆算するのに必要なんだ)。
    fn droppable(&self, _drag: &DragState, _dragged: &Element, _target: &Element) -> bool {
        true
    }

    /// 受理されたドロップの後処理。`droppable` が true を返した時だけ呼ばれる。
    /// Some を返すと、その値が要素の新しい表示ズレとして適用されるよ。
    fn on_drop(
        &mut self,
        _drag: &DragState,
        _dragged: &Element,
        _target: &Element,
    ) -> Option<Differential> {
        None
    }
}

/// mousedown: ドラッグ開始の処理だよ。
///
/// 背景やつかめない要素なら何もしない (エラーでもない、ただの無視)。
/// つかんだら:
/// 1. 要素を兄弟の一番上へ (他の要素に隠れないように)
/// 2. ポインタイベントを切る (ドロップ先を「下にあるもの」から拾うため)
/// 3. 今の表示ズレを記録 (ズレたままの要素も跳ねずにつかめる！)
/// 4. つかみ点 = 真の座標 − 表示ズレ を記録
pub fn handle_grab<R: DragRules>(
    rules_arc: &Arc<Mutex<R>>,
    drag_arc: &Arc<Mutex<DragState>>,
    svg_root: &SvgsvgElement,
    event: &MouseEvent,
) {
    let target = match event_handler::event_target_element(event) {
        Some(target) => target,
        None => return,
    };
    // 背景そのものはつかめないよ。ここで mousedown を握りつぶす。
    if target.id() == BACKDROP_ID {
        return;
    }

    let rules = match rules_arc.try_lock() {
        Ok(rules) => rules,
        Err(_) => {
            warn!("Rules are busy in handle_grab; ignoring mousedown");
            return;
        }
    };
    if !rules.draggable(&target) {
        return;
    }

    let mut drag = match drag_arc.try_lock() {
        Ok(drag) => drag,
        Err(_) => {
            warn!("Drag state is busy in handle_grab; ignoring mousedown");
            return;
        }
    };
    // 同時にドラッグできるのは 1 個だけ！
    if drag.is_dragging() {
        warn!("Grab while another drag is in flight; ignoring");
        return;
    }

    if let Err(e) = svg_transform::raise_to_top(&target) {
        error!("Failed to raise '{}' to the top: {:?}", target.id(), e);
    }
    if let Err(e) = svg_transform::set_pointer_events(&target, false) {
        error!("Failed to suspend pointer events on '{}': {:?}", target.id(), e);
        return;
    }

    // 表示ズレが読めなかったら、つかみ自体を中止する。
    // ズレを捏造してドラッグを続けると、ドロップ判定が本来と違うセルを
    // 見てしまって盤面が壊れる。壊れた盤面は直せないから、ここで止める！
    let differential = match svg_transform::differential(&target) {
        Ok(differential) => differential,
        Err(e) => {
            error!("Could not read the transform of '{}'; aborting grab: {:?}", target.id(), e);
            let _ = svg_transform::set_pointer_events(&target, true);
            return;
        }
    };

    let coords = svg_transform::true_coords(svg_root, event);
    drag.begin(target.id(), coords.x, coords.y, differential);
    log(&format!(
        "Grabbed '{}' at ({}, {}) with differential ({}, {})",
        drag.target_id().unwrap_or(""),
        coords.x,
        coords.y,
        differential.dx,
        differential.dy
    ));
}

/// mousemove: ドラッグ中の追従処理だよ。
///
/// 真の座標はイベントごとに必ず計算し直す (パン/ズームは
/// いつ変わるか分からないから)。何もつかんでいなければ何もしない。
pub fn handle_drag(
    drag_arc: &Arc<Mutex<DragState>>,
    document: &Document,
    svg_root: &SvgsvgElement,
    event: &MouseEvent,
) {
    let coords = svg_transform::true_coords(svg_root, event);

    let drag = match drag_arc.try_lock() {
        Ok(drag) => drag,
        Err(_) => return,
    };
    let target_id = match drag.target_id() {
        Some(id) => id,
        None => return, // if we don't currently have an element in tow, don't do anything
    };
    let element = match document.get_element_by_id(target_id) {
        Some(element) => element,
        None => {
            error!("Dragged element '{}' disappeared from the scene", target_id);
            return;
        }
    };

    // つかんだ点と要素のズレ (grab offset) を差し引いて表示する。
    // こうするとボールの中心じゃなくて、最初に指を置いた場所に
    // くっついて動く。断然自然！
    let offset = drag.drag_offset(coords.x, coords.y);
    if let Err(e) = svg_transform::apply_translation(&element, offset.dx, offset.dy) {
        error!("Failed to move '{}': {:?}", target_id, e);
    }
}

/// mousemove (もう 1 本のリスナー): カーソルの見た目を更新するよ。
///
/// - アイドル中: つかめる要素の上では "grabbing"、他は "default"
/// - ドラッグ中: 今ホバーしている要素に置けるなら "grabbing"、
///   置けないなら "not-allowed"
///
/// ("grab" は Chrome が対応してないので、つかむ前から "grabbing" だよ)
pub fn handle_hover_cursor<R: DragRules>(
    rules_arc: &Arc<Mutex<R>>,
    drag_arc: &Arc<Mutex<DragState>>,
    document: &Document,
    event: &MouseEvent,
) {
    let target = match event_handler::event_target_element(event) {
        Some(target) => target,
        None => return,
    };
    let rules = match rules_arc.try_lock() {
        Ok(rules) => rules,
        Err(_) => return,
    };
    let drag = match drag_arc.try_lock() {
        Ok(drag) => drag,
        Err(_) => return,
    };

    let cursor = if let Some(dragged_id) = drag.target_id() {
        match document.get_element_by_id(dragged_id) {
            Some(dragged) => {
                if rules.droppable(&drag, &dragged, &target) {
                    "grabbing"
                } else {
                    "not-allowed"
                }
            }
            None => return,
        }
    } else if rules.draggable(&target) {
        "grabbing"
    } else {
        "default"
    };
    svg_transform::set_cursor(&target, cursor);
}

/// mouseup: ドロップの処理だよ。ここがドラッグの終着点！
///
/// - 置けない場所なら、つかみ時に記録した表示ズレをそのまま適用し直す。
///   「真の位置」に戻すんじゃないのがポイント！ズレたままつかんだ要素は
///   ズレたままの見た目に戻らないといけない。
/// - 置ける場所なら `on_drop` を呼んで、返ってきたスナップ用のズレを適用。
/// - どちらの場合もポインタイベントを復活させて、カーソルを戻して、
///   ドラッグ状態を空にする。
pub fn handle_drop<R: DragRules>(
    rules_arc: &Arc<Mutex<R>>,
    drag_arc: &Arc<Mutex<DragState>>,
    document: &Document,
    event: &MouseEvent,
) {
    // try_lock がここでの再入ガード。ドロップ処理が盤面を書き換えてる
    // 最中に次のポインタイベントが割り込んできても、ロックが取れずに
    // ただ捨てられるだけ。処理が混ざることは無いんだ。
    let mut rules = match rules_arc.try_lock() {
        Ok(rules) => rules,
        Err(_) => {
            warn!("Rules are busy in handle_drop; dropping the event");
            return;
        }
    };
    let mut drag = match drag_arc.try_lock() {
        Ok(drag) => drag,
        Err(_) => {
            warn!("Drag state is busy in handle_drop; dropping the event");
            return;
        }
    };

    let dragged_id = match drag.target_id() {
        Some(id) => id.to_string(),
        None => return, // if we aren't currently dragging an element, don't do anything
    };
    let dragged = match document.get_element_by_id(&dragged_id) {
        Some(element) => element,
        None => {
            error!("Dragged element '{}' vanished before drop; clearing the gesture", dragged_id);
            drag.clear();
            return;
        }
    };

    let drop_target = event_handler::event_target_element(event);

    let mut accepted = false;
    if let Some(target) = drop_target.as_ref() {
        if rules.droppable(&drag, &dragged, target) {
            log(&format!("Drop of '{}' accepted on '{}'", dragged_id, target.id()));
            if let Some(snap) = rules.on_drop(&drag, &dragged, target) {
                if let Err(e) = svg_transform::apply_translation(&dragged, snap.dx, snap.dy) {
                    error!("Failed to snap '{}' into place: {:?}", dragged_id, e);
                }
            }
            accepted = true;
        }
    }

    if !accepted {
        // Revert to its before-drag position.
        // (0,0) に戻して「本来の位置」へ飛ばすこともできるけど、
        // それは見た目としては嬉しくないので、やらない。
        let start = drag.start_differential();
        if let Err(e) = svg_transform::apply_translation(&dragged, start.dx, start.dy) {
            error!("Failed to revert '{}': {:?}", dragged_id, e);
        }
    }

    // turn the pointer-events back on, so we can grab this item later
    if let Err(e) = svg_transform::set_pointer_events(&dragged, true) {
        error!("Failed to restore pointer events on '{}': {:?}", dragged_id, e);
    }
    if let Some(target) = drop_target.as_ref() {
        svg_transform::set_cursor(target, "default");
    }
    drag.clear(); // これを忘れるとボールがマウスに一生くっついてくる！
}
