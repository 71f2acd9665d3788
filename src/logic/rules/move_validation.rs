// src/logic/rules/move_validation.rs
//! カード移動の全体的な妥当性チェックを行う。
//! ここで見るのは「どこからどこへ」の経路だけ。カードの並びは各山の `can_accept` が見る。

use crate::components::stack::PileId;

/// `source` から `target` へ `run_len` 枚の run を動かす経路が許されてるか。
///
/// - 山札 (Stock) からは捨て札 (Waste) にしか行けない。
/// - 山札に直接置くことはできない (戻すのはリセットか Undo だけ)。
/// - 捨て札には山札からしか置けない。
/// - 組札から組札への移動はなし。組札に置けるのは1枚だけ。
/// - 同じ山への移動は移動じゃない。
pub fn is_route_allowed(source: PileId, target: PileId, run_len: usize) -> bool {
    if source == target || run_len == 0 {
        return false;
    }
    let allowed = match (source, target) {
        (_, PileId::Stock) => false,
        (PileId::Stock, PileId::Waste) => true,
        (PileId::Stock, _) => false,
        (_, PileId::Waste) => false,
        (PileId::Foundation(_), PileId::Foundation(_)) => false,
        (_, PileId::Foundation(_)) => run_len == 1,
        (_, PileId::Tableau(_)) => true,
    };
    if !allowed {
        log::debug!("[Rules Validation] Moving {} card(s) from {} to {} is not allowed.", run_len, source, target);
    }
    allowed
}
