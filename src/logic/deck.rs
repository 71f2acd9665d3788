// src/logic/deck.rs

use crate::components::card::{Card, ALL_RANKS, ALL_SUITS};
use crate::config::rules::DECK_SIZE;
use rand::{seq::SliceRandom, thread_rng, Rng};

/// 標準的な52枚のカードデッキ（ソリティア用）を生成する関数だよ！🃏
///
/// 生成された時点では、すべてのカードは裏向き！
/// 並び順はスート順 (♠, ♦, ♣, ♥)、各スートの中は A から K。
pub fn create_standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);

    for &suit in ALL_SUITS.iter() {
        for &rank in ALL_RANKS.iter() {
            deck.push(Card::new(suit, rank));
        }
    }
    deck
}

/// カードデッキをシャッフルする関数だよ。乱数はスレッドローカルなものを使う。
pub fn shuffle_deck(deck: &mut [Card]) {
    let mut rng = thread_rng();
    shuffle_deck_with(deck, &mut rng);
}

/// 乱数生成器を指定してシャッフルする。シード固定の配り直しやテストで使う！
/// `SliceRandom::shuffle` は Fisher–Yates なので、全ての並びが等確率になるよ。
pub fn shuffle_deck_with<R: Rng + ?Sized>(deck: &mut [Card], rng: &mut R) {
    deck.shuffle(rng);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn deck_creation() {
        let deck = create_standard_deck();

        // 1. カードが52枚あるかチェック！
        assert_eq!(deck.len(), 52);

        // 2. 重複がないかチェック！
        let unique: HashSet<_> = deck.iter().map(|card| card.id()).collect();
        assert_eq!(unique.len(), 52, "デッキに重複したカードが見つかりました！");

        // 3. すべてのカードが裏向きかチェック！
        assert!(deck.iter().all(|card| !card.is_face_up()), "デッキに表向きのカードが含まれています！");
    }

    #[test]
    fn test_shuffle_deck_changes_order() {
        let initial_deck = create_standard_deck();
        let mut shuffled_deck = initial_deck.clone();
        shuffle_deck(&mut shuffled_deck);

        // ごく稀に同じ順番になる可能性もあるけど、52! 分の 1 なので実質ありえない
        assert_ne!(initial_deck, shuffled_deck, "シャッフルしても順番が変わってない");
        assert_eq!(initial_deck.len(), shuffled_deck.len(), "シャッフルでカード数が変わった！");
    }

    #[test]
    fn test_seeded_shuffle_is_reproducible() {
        let mut a = create_standard_deck();
        let mut b = create_standard_deck();
        shuffle_deck_with(&mut a, &mut StdRng::seed_from_u64(7));
        shuffle_deck_with(&mut b, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b, "同じシードなら同じ並びになるはず");
    }
}
