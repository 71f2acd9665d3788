//! 組札 (Foundation) へのカード移動ルールを定義するよ。

use crate::components::card::{Card, Rank};

/// 指定されたカードが、組札の一番上 (`top`) に置けるかチェックする。
///
/// 空の組札 (`top` が None) にはエースだけ。
/// そうじゃなければ同じスートで、ランクがちょうど1つ上のカード。
pub fn can_move_to_foundation(card: &Card, top: Option<&Card>) -> bool {
    log::debug!("[Foundation Rule] Checking move: {} onto {:?}", card, top.map(|c| c.to_string()));

    let result = match top {
        None => {
            let is_ace = card.rank == Rank::Ace;
            log::debug!("[Foundation Rule]  - Target foundation is empty. Is Ace: {}", is_ace);
            is_ace
        }
        Some(top) => {
            let suit_matches = card.suit == top.suit;
            let is_next_rank = card.rank.value() == top.rank.value() + 1;
            log::debug!(
                "[Foundation Rule]  - Suit matches: {}. Rank is next: {}.",
                suit_matches,
                is_next_rank
            );
            suit_matches && is_next_rank
        }
    };

    log::debug!("[Foundation Rule] Final result for {}: {}", card, result);
    result
}

/// run 全体を組札が受け付けるか。組札には1枚ずつしか置けないよ。
pub fn can_accept_run_on_foundation(run: &[Card], top: Option<&Card>) -> bool {
    match run {
        [card] => card.is_face_up() && can_move_to_foundation(card, top),
        _ => false,
    }
}
