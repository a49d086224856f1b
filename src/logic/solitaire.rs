// src/logic/solitaire.rs
//! ペグソリティアのルールをドラッグ操作に接続するモジュールだよ！⚪🖱️
//!
//! `DragRules` の 3 つのフックをここで実装する。格子の計算と合法手の
//! 判定は `logic::rules` の純粋関数に任せて、このファイルは
//! 「SVG 要素 ↔ セル番地」の橋渡しと、受理されたドロップの後始末
//! (捕獲・盤面更新・終局チェック) に専念するんだ。

use std::sync::{Arc, Mutex};

use log::{error, warn};
use web_sys::{Document, Element};

use crate::app::drag_handler::{DragRules, DRAGGABLE_CLASS};
use crate::app::{layout_calculator, svg_transform};
use crate::components::board::{Board, HOLE_ID_PREFIX};
use crate::components::border_cursor::BorderCursor;
use crate::components::drag_state::{DragState, Differential};
use crate::components::grid::GridPos;
use crate::components::position::Position;
use crate::log;
use crate::logic::rules::{self, GameOutcome};

/// ドラッグ中のボールとドロップ先から読み取った、1 手分の情報。
struct CurrentMove {
    from: GridPos,
    to: GridPos,
    dragged_center: Position,
    target_center: Position,
}

/// 盤面の状態と捕獲リングのカーソルを持つ、ルールの本体だよ！
///
/// 盤面 (`Board`) はアプリ全体で共有するから `Arc<Mutex<_>>`。
/// リングの角度はこのルールだけが進めるので、ただのフィールドとして
/// 自分で所有する (グローバル変数にはしない！)。
pub struct SolitaireRules {
    board: Arc<Mutex<Board>>,
    border: BorderCursor,
    document: Document,
}

impl SolitaireRules {
    pub fn new(board: Arc<Mutex<Board>>, document: Document) -> Self {
        Self {
            board,
            border: BorderCursor::new(),
            document,
        }
    }

    /// ドラッグ中のボールとドロップ先の穴から、出発セルと着地セルを読み取る。
    ///
    /// 出発セルは「宣言上の中心 + つかみ時の表示ズレ」から逆算するよ。
    /// ドラッグ中の生のカーソル位置は使わない！前の手のスナップ分の
    /// ズレが残っていても、この導出ならボールの本当のセルを言い当てられる。
    fn current_move(&self, drag: &DragState, dragged: &Element, target: &Element) -> Option<CurrentMove> {
        let dragged_center = svg_transform::circle_center(dragged)?;
        let target_center = svg_transform::circle_center(target)?;
        let start = drag.start_differential();
        let from = layout_calculator::grid_at(dragged_center.x + start.dx, dragged_center.y + start.dy);
        let to = layout_calculator::grid_at(target_center.x, target_center.y);
        Some(CurrentMove {
            from,
            to,
            dragged_center,
            target_center,
        })
    }

    /// 終局していたらモーダルで知らせる。続行中なら何もしない。
    fn announce(&self, outcome: GameOutcome) {
        let message = match outcome {
            GameOutcome::MovesAvailable => return,
            GameOutcome::Win => "Congratulations, you win!".to_string(),
            GameOutcome::GameOver(remaining) => {
                format!("Game over, {} balls remaining", remaining)
            }
        };
        log(&format!("Game finished: {}", message));
        match web_sys::window() {
            Some(window) => {
                if let Err(e) = window.alert_with_message(&message) {
                    error!("Failed to show the end-of-game alert: {:?}", e);
                }
            }
            None => error!("No window to announce the result: {}", message),
        }
    }
}

impl DragRules for SolitaireRules {
    // draggable はデフォルト実装のまま！
    // 「draggable クラスが付いている = まだ生きてるボール」で、
    // クラスの付け外しはこのルール自身が捕獲時にやるからね。

    fn droppable(&self, drag: &DragState, dragged: &Element, target: &Element) -> bool {
        // 置けるのは穴の上だけ。ボール・背景・お皿は id の接頭辞で弾ける。
        if !target.id().starts_with(HOLE_ID_PREFIX) {
            return false;
        }
        let mv = match self.current_move(drag, dragged, target) {
            Some(mv) => mv,
            None => return false, // 中心が読めない要素は置き場所として扱わない
        };
        let board = match self.board.try_lock() {
            Ok(board) => board,
            Err(_) => {
                warn!("Board is busy; rejecting the drop check");
                return false;
            }
        };
        rules::legal_jump(&board, mv.from, mv.to).is_some()
    }

    fn on_drop(&mut self, drag: &DragState, dragged: &Element, target: &Element) -> Option<Differential> {
        // --- 1. 手の情報と関係者を全部そろえる (まだ何も書き換えない！) ---
        let mv = match self.current_move(drag, dragged, target) {
            Some(mv) => mv,
            None => {
                error!("on_drop: could not read circle centers; aborting the move");
                return None;
            }
        };
        let mut board = match self.board.try_lock() {
            Ok(board) => board,
            Err(_) => {
                error!("on_drop: board is busy; aborting the move");
                return None;
            }
        };
        let mid = match rules::legal_jump(&board, mv.from, mv.to) {
            Some(mid) => mid,
            None => {
                error!("on_drop called for an illegal move {:?} -> {:?}", mv.from, mv.to);
                return None;
            }
        };
        let captured_id = match board.peg_at(mid) {
            Some(peg) => peg.clone(),
            None => {
                error!("No peg to capture at {:?}", mid);
                return None;
            }
        };
        let captured = match self.document.get_element_by_id(captured_id.element_id()) {
            Some(element) => element,
            None => {
                // 盤面に触る前に中止できるのが、この順番のありがたいところ。
                error!("Captured peg '{}' has no scene element; aborting the move", captured_id.element_id());
                return None;
            }
        };
        let captured_center = match svg_transform::circle_center(&captured) {
            Some(center) => center,
            None => {
                error!("Captured peg '{}' has no readable center; aborting the move", captured_id.element_id());
                return None;
            }
        };

        // --- 2. 捕獲したボールをお皿の縁へ移動 ---
        let slot = layout_calculator::rim_slot(self.border.angle());
        if let Err(e) = svg_transform::apply_translation(
            &captured,
            slot.x - captured_center.x,
            slot.y - captured_center.y,
        ) {
            error!("Failed to park the captured peg on the rim: {:?}", e);
        }
        // クラスを外して、もうつかめないただの飾りにする
        if let Err(e) = captured.class_list().remove_1(DRAGGABLE_CLASS) {
            error!("Failed to retire the captured peg: {:?}", e);
        }
        self.border.advance();

        // --- 3. 盤面のマッピングを更新 ---
        // 出発セルと中間セルが空き、着地セルに動かしたボール。
        if rules::apply_jump(&mut board, mv.from, mv.to).is_none() {
            error!("Board rejected a move that had already passed validation");
        }

        // --- 4. 終局チェック。捕獲のたびに毎回！ ---
        self.announce(rules::check_finished(&board));

        // --- 5. スナップ用のズレを返す ---
        // 宣言上の中心同士の差だから、ドラッグの微妙な置き加減に関係なく
        // ボールがぴったり穴の真ん中に乗るよ。
        Some(Differential::new(
            mv.target_center.x - mv.dragged_center.x,
            mv.target_center.y - mv.dragged_center.y,
        ))
    }
}
