// src/logic/rules.rs
//! ペグソリティアのルール判定ロジックをまとめるモジュールだよ！⚪✅
//!
//! ここにあるのは盤面 (`Board`) だけを見る純粋な関数たち。
//! DOM や SVG の事情は一切知らないから、普通のユニットテストで
//! ルールを隅々まで検証できるんだ。これ大事！

use crate::components::board::Board;
use crate::components::cell::PegId;
use crate::components::grid::GridPos;

/// 捕獲後の盤面スキャンの結果を表す列挙型だよ。
///
/// - `MovesAvailable`: まだ跳べる手が残ってる。ゲーム続行！
/// - `Win`: 手が無くて、残りボールがちょうど 1 個。完全勝利！👑
/// - `GameOver`: 手が無くて、ボールが複数残ってる。残念…。残り個数付き。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    MovesAvailable,
    Win,
    GameOver(usize),
}

/// 2 セル間の移動が「縦横どちらかにちょうど 2 マス」のジャンプ形なら、
/// 跳び越える中間セルの番地を返すよ。
///
/// 盤面の状態はここでは見ない！形だけのチェック。
/// 斜め、距離 1、距離 3 以上は全部 None。
pub fn jump_midpoint(from: GridPos, to: GridPos) -> Option<GridPos> {
    let dc = to.col - from.col;
    let dr = to.row - from.row;

    let orthogonal_two = (dc == 0 && dr.abs() == 2) || (dr == 0 && dc.abs() == 2);
    if !orthogonal_two {
        return None;
    }
    // ちょうど 2 マスだから、中間は差の半分を足した位置。
    Some(GridPos::new(from.col + dc / 2, from.row + dr / 2))
}

/// 盤面の状態まで含めてジャンプが合法か判定するよ。合法なら中間セルを返す。
///
/// 条件は 3 つ:
/// 1. `from` にボールが乗っている (動かすボールの本当のセル)
/// 2. 中間セルにボールが乗っている (これが捕獲されるボール)
/// 3. `to` が盤面上の空き穴 (盤外は `is_empty` が false になるので自動的に弾ける)
pub fn legal_jump(board: &Board, from: GridPos, to: GridPos) -> Option<GridPos> {
    let mid = jump_midpoint(from, to)?;
    if board.is_occupied(from) && board.is_occupied(mid) && board.is_empty(to) {
        Some(mid)
    } else {
        None
    }
}

/// 合法なジャンプを盤面に適用して、捕獲されたボールのハンドルを返すよ。
///
/// 変化するセルはちょうど 3 つだけ:
/// - `from`: ボールが居なくなって空きに
/// - 中間セル: 捕獲されて空きに
/// - `to`: 動かしたボールが乗る
///
/// 不正なジャンプなら盤面には一切触らず None を返す。
/// 「チェックしてから全部書き換える」の順番を崩さないこと！
/// 途中で失敗して盤面が半端に壊れたら、終局判定が一生狂っちゃう。
pub fn apply_jump(board: &mut Board, from: GridPos, to: GridPos) -> Option<PegId> {
    let mid = legal_jump(board, from, to)?;

    // legal_jump が通った時点で from と mid は必ず Occupied、to は必ず Empty。
    let moved = board.take_peg(from)?;
    let captured = board.take_peg(mid)?;
    let placed = board.place_peg(to, moved);
    debug_assert!(placed, "legal_jump guarantees the target cell is empty");

    Some(captured)
}

/// 終局判定。盤面の全セルをスキャンして、まだ跳べる手があるか調べるよ。
///
/// ボールが乗っている各セルについて、上下左右の 4 方向を見る:
/// 隣のセルにボールが居て、その先のセルが空き穴なら、まだ跳べる！
/// (盤外のセルは `is_empty` が false なので、端の処理は自然に片付くんだ)
///
/// 手が 1 つも無かったら、残り 1 個なら勝ち、それ以外は残り個数付きの負け。
/// このスキャンは O(49) だから毎回やっても全然平気。捕獲のたびに必ず
/// 呼ぶこと！遅延させると終局の通知タイミングがズレちゃうからね。
pub fn check_finished(board: &Board) -> GameOutcome {
    const DIRECTIONS: [(i32, i32); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

    let mut remaining = 0;
    for pos in Board::positions() {
        if !board.is_occupied(pos) {
            continue;
        }
        remaining += 1;
        for &(dc, dr) in DIRECTIONS.iter() {
            if board.is_occupied(pos.offset(dc, dr)) && board.is_empty(pos.offset(2 * dc, 2 * dr)) {
                return GameOutcome::MovesAvailable;
            }
        }
    }

    if remaining == 1 {
        GameOutcome::Win
    } else {
        GameOutcome::GameOver(remaining)
    }
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::cell::Cell;

    /// 盤面からボールを全部取り除いたまっさらな十字盤を作るヘルパー。
    fn cleared_board() -> Board {
        let mut board = Board::standard_layout();
        for pos in Board::positions() {
            let _ = board.take_peg(pos);
        }
        assert_eq!(board.peg_count(), 0);
        board
    }

    /// 指定セルに「そのセル生まれ」の id でボールを置くヘルパー。
    fn put_peg(board: &mut Board, col: i32, row: i32) {
        let pos = GridPos::new(col, row);
        assert!(board.place_peg(pos, Board::peg_id(pos)));
    }

    #[test]
    fn midpoint_accepts_only_orthogonal_distance_two() {
        let from = GridPos::new(3, 3);

        // 上下左右 2 マスは OK で、中間セルが正しい
        assert_eq!(jump_midpoint(from, GridPos::new(3, 1)), Some(GridPos::new(3, 2)));
        assert_eq!(jump_midpoint(from, GridPos::new(3, 5)), Some(GridPos::new(3, 4)));
        assert_eq!(jump_midpoint(from, GridPos::new(1, 3)), Some(GridPos::new(2, 3)));
        assert_eq!(jump_midpoint(from, GridPos::new(5, 3)), Some(GridPos::new(4, 3)));

        // 斜め・距離違いは全部ダメ
        assert_eq!(jump_midpoint(from, GridPos::new(5, 5)), None); // 斜め
        assert_eq!(jump_midpoint(from, GridPos::new(4, 5)), None); // 桂馬跳びみたいなやつ
        assert_eq!(jump_midpoint(from, GridPos::new(3, 4)), None); // 距離 1
        assert_eq!(jump_midpoint(from, GridPos::new(3, 6)), None); // 距離 3
        assert_eq!(jump_midpoint(from, from), None); // その場

        println!("中間セル判定テスト、成功！🎉");
    }

    #[test]
    fn legal_jump_on_the_opening_board() {
        let board = Board::standard_layout();
        let center = GridPos::new(3, 3);

        // 開始盤面では、中央の空きへ向かう 4 方向のジャンプだけが合法
        assert_eq!(legal_jump(&board, GridPos::new(3, 1), center), Some(GridPos::new(3, 2)));
        assert_eq!(legal_jump(&board, GridPos::new(3, 5), center), Some(GridPos::new(3, 4)));
        assert_eq!(legal_jump(&board, GridPos::new(1, 3), center), Some(GridPos::new(2, 3)));
        assert_eq!(legal_jump(&board, GridPos::new(5, 3), center), Some(GridPos::new(4, 3)));

        // 着地先にボールが居たらダメ
        assert_eq!(legal_jump(&board, GridPos::new(3, 0), GridPos::new(3, 2)), None);
        // 盤外への着地もダメ (中間にはボールが居るケース)
        assert_eq!(legal_jump(&board, GridPos::new(0, 3), GridPos::new(0, 5)), None);

        println!("開始盤面の合法手テスト、成功！🎉");
    }

    #[test]
    fn legal_jump_requires_a_peg_in_the_middle() {
        let mut board = Board::standard_layout();
        // 跳び越えるはずのボールを退かしてしまう
        board.take_peg(GridPos::new(3, 2));

        assert_eq!(legal_jump(&board, GridPos::new(3, 1), GridPos::new(3, 3)), None);

        println!("中間セル必須テスト、成功！🎉");
    }

    #[test]
    fn legal_jump_requires_a_peg_at_the_source() {
        let mut board = cleared_board();
        put_peg(&mut board, 3, 2);

        // 中間にボール、着地先は空きだけど、動かす元が空っぽ
        assert_eq!(legal_jump(&board, GridPos::new(3, 1), GridPos::new(3, 3)), None);

        println!("移動元必須テスト、成功！🎉");
    }

    #[test]
    fn apply_jump_changes_exactly_three_cells() {
        let before = Board::standard_layout();
        let mut board = before.clone();
        let from = GridPos::new(3, 1);
        let mid = GridPos::new(3, 2);
        let to = GridPos::new(3, 3);

        let captured = apply_jump(&mut board, from, to).expect("opening move is legal");

        // 捕獲されたのは中間セルに居たボール
        assert_eq!(captured, Board::peg_id(mid));
        // 動かしたボールは id ごと着地先へ
        assert_eq!(board.peg_at(to), Some(&Board::peg_id(from)));
        assert!(board.is_empty(from));
        assert!(board.is_empty(mid));
        assert_eq!(board.peg_count(), 31, "Exactly one peg leaves the board");

        // 他のセルは 1 マスも変わっていないこと！
        for pos in Board::positions() {
            if pos == from || pos == mid || pos == to {
                continue;
            }
            assert_eq!(board.cell(pos), before.cell(pos), "Cell {:?} must be untouched", pos);
        }

        println!("ジャンプ適用テスト、成功！🎉");
    }

    #[test]
    fn apply_jump_rejects_without_touching_the_board() {
        let before = Board::standard_layout();
        let mut board = before.clone();

        // 斜めジャンプは不正。盤面は 1 マスも変わらない。
        assert_eq!(apply_jump(&mut board, GridPos::new(2, 2), GridPos::new(4, 4)), None);
        assert_eq!(board, before);

        println!("不正ジャンプ拒否テスト、成功！🎉");
    }

    #[test]
    fn opening_board_has_moves() {
        assert_eq!(check_finished(&Board::standard_layout()), GameOutcome::MovesAvailable);
        println!("開始盤面の手有り判定テスト、成功！🎉");
    }

    #[test]
    fn lone_peg_is_a_win() {
        let mut board = cleared_board();
        put_peg(&mut board, 3, 3);

        assert_eq!(check_finished(&board), GameOutcome::Win);
        println!("勝利判定テスト、成功！🎉");
    }

    #[test]
    fn two_stranded_pegs_are_game_over() {
        let mut board = cleared_board();
        // 斜めに接する 2 個。縦横の隣は空っぽだから、跳べる手は存在しない。
        put_peg(&mut board, 2, 2);
        put_peg(&mut board, 3, 3);

        assert_eq!(check_finished(&board), GameOutcome::GameOver(2));
        println!("ゲームオーバー判定テスト、成功！🎉");
    }

    #[test]
    fn two_pegs_in_a_line_can_still_move() {
        let mut board = cleared_board();
        // 縦に並んだ 2 個は、空き盤面ではまだ跳べる
        // ((2,0) が (2,1) を跳び越えて (2,2) に着地できる)
        put_peg(&mut board, 2, 0);
        put_peg(&mut board, 2, 1);

        assert_eq!(check_finished(&board), GameOutcome::MovesAvailable);
        println!("直線 2 個の手有り判定テスト、成功！🎉");
    }

    #[test]
    fn opening_move_end_to_end() {
        let mut board = Board::standard_layout();

        // 定番の初手: (3,1) が (3,2) を跳び越えて中央 (3,3) へ
        let captured = apply_jump(&mut board, GridPos::new(3, 1), GridPos::new(3, 3))
            .expect("the classic opening move");

        assert_eq!(captured.element_id(), "ball3_2");
        assert!(matches!(board.cell(GridPos::new(3, 1)), Cell::Empty));
        assert!(matches!(board.cell(GridPos::new(3, 2)), Cell::Empty));
        assert_eq!(board.peg_at(GridPos::new(3, 3)), Some(&Board::peg_id(GridPos::new(3, 1))));

        // 初手直後はもちろんゲーム続行
        assert_eq!(check_finished(&board), GameOutcome::MovesAvailable);

        println!("初手エンドツーエンドテスト、成功！🎉");
    }
}
