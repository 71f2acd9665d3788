// src/components/foundation.rs

use serde::{Deserialize, Serialize};

use crate::components::card::{Card, CardId, Facing, Suit};
use crate::components::pile::Pile;
use crate::config::rules::RANKS_PER_SUIT;
use crate::logic::rules::foundation::can_accept_run_on_foundation;

/// 組札 (Foundation) だよ！A から K まで同じスートで積み上げていく場所。🏆
///
/// 最初は空っぽで、どのスートでもない。最初に置かれたエースでスートが決まるよ。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Foundation {
    cards: Vec<Card>,
}

impl Foundation {
    pub fn new() -> Self {
        Self::default()
    }

    /// この組札のスート。空ならまだ決まってないので None。
    pub fn suit(&self) -> Option<Suit> {
        self.cards.first().map(|card| card.suit)
    }

    /// A から K まで全部そろってる？
    pub fn is_complete(&self) -> bool {
        self.cards.len() == RANKS_PER_SUIT
    }
}

impl Pile for Foundation {
    fn cards(&self) -> &[Card] {
        &self.cards
    }

    fn push(&mut self, mut card: Card) {
        card.set_facing(Facing::FaceUp);
        self.cards.push(card);
    }

    /// 一番上を取り出す。Undo や「場札に戻す」で使うので、ルールチェックはしないよ。
    fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    fn pop_run(&mut self, from: CardId) -> Option<Vec<Card>> {
        // 組札から持ち上げられるのは一番上の1枚だけ
        match self.cards.last() {
            Some(top) if top.id() == from => self.cards.pop().map(|card| vec![card]),
            _ => None,
        }
    }

    fn can_accept(&self, run: &[Card]) -> bool {
        can_accept_run_on_foundation(run, self.top())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::Rank;

    #[test]
    fn empty_foundation_accepts_any_ace_only() {
        let foundation = Foundation::new();
        for suit in crate::components::card::ALL_SUITS {
            assert!(foundation.can_accept(&[Card::face_up(suit, Rank::Ace)]));
            assert!(!foundation.can_accept(&[Card::face_up(suit, Rank::Two)]));
            assert!(!foundation.can_accept(&[Card::face_up(suit, Rank::King)]));
        }
        assert_eq!(foundation.suit(), None);
    }

    #[test]
    fn hearts_five_accepts_only_hearts_six() {
        let mut foundation = Foundation::new();
        for rank in [Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five] {
            foundation.push(Card::face_up(Suit::Heart, rank));
        }
        assert_eq!(foundation.suit(), Some(Suit::Heart));

        assert!(foundation.can_accept(&[Card::face_up(Suit::Heart, Rank::Six)]));
        assert!(!foundation.can_accept(&[Card::face_up(Suit::Diamond, Rank::Six)]));
        assert!(!foundation.can_accept(&[Card::face_up(Suit::Heart, Rank::Seven)]));
        assert!(!foundation.can_accept(&[Card::face_up(Suit::Heart, Rank::Five)]));
    }

    #[test]
    fn multi_card_runs_are_rejected() {
        let foundation = Foundation::new();
        let run = [Card::face_up(Suit::Club, Rank::Ace), Card::face_up(Suit::Club, Rank::Two)];
        assert!(!foundation.can_accept(&run));
        assert!(!foundation.can_accept(&[]));
    }

    #[test]
    fn pop_run_only_lifts_the_top_card() {
        let mut foundation = Foundation::new();
        foundation.push(Card::face_up(Suit::Spade, Rank::Ace));
        foundation.push(Card::face_up(Suit::Spade, Rank::Two));

        let ace = CardId::new(Suit::Spade, Rank::Ace);
        assert!(foundation.pop_run(ace).is_none(), "下のカードは持ち上げられない");

        let two = CardId::new(Suit::Spade, Rank::Two);
        let lifted = foundation.pop_run(two).unwrap();
        assert_eq!(lifted.len(), 1);
        assert_eq!(foundation.len(), 1);
    }
}
