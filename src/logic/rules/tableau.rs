//! 場札 (Tableau) へのカード移動ルールを定義するよ。

use crate::components::card::{Card, Rank};

use super::common::{colors_differ, is_one_rank_below, is_valid_run};

/// 指定されたカードが、場札の一番上 (`top`) に置けるかチェックする。
///
/// 空の場札にはキングだけ。そうじゃなければ色違いでランクが1つ下のカード。
pub fn can_move_to_tableau(card: &Card, top: Option<&Card>) -> bool {
    match top {
        Some(top) => {
            let different = colors_differ(card, top);
            let one_less = is_one_rank_below(card, top);
            log::debug!(
                "[Tableau Rule] Moving {} onto {}. Colors different: {}. Rank is one less: {}.",
                card,
                top,
                different,
                one_less
            );
            different && one_less
        }
        None => {
            let is_king = card.rank == Rank::King;
            log::debug!("[Tableau Rule] Moving {} onto empty Tableau. Is King: {}.", card, is_king);
            is_king
        }
    }
}

/// run 全体を場札が受け付けるか。
///
/// run 自体がちゃんと並んでること、エースが一番下じゃないこと、
/// そして一番下のカードが `can_move_to_tableau` を満たすこと。
pub fn can_accept_run_on_tableau(run: &[Card], top: Option<&Card>) -> bool {
    let Some(bottom) = run.first() else {
        return false;
    };
    if bottom.rank == Rank::Ace {
        // エースは組札にしか行けない
        return false;
    }
    is_valid_run(run) && can_move_to_tableau(bottom, top)
}
