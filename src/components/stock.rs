// src/components/stock.rs

use serde::{Deserialize, Serialize};

use crate::components::card::{Card, Facing};
use crate::components::deck::Deck;
use crate::error::EngineError;

/// 山札 (Stock)。中身はデッキの「まだ引かれてない」カードそのものだよ。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    deck: Deck,
}

impl Stock {
    pub fn new(deck: Deck) -> Self {
        Self { deck }
    }

    /// 最大 `count` 枚めくる。めくった順に、表向きで返すよ。
    pub fn deal(&mut self, count: usize) -> Vec<Card> {
        let mut cards = self.deck.draw_up_to(count);
        for card in cards.iter_mut() {
            card.set_facing(Facing::FaceUp);
        }
        cards
    }

    /// 最大 `count` 枚を裏向きのまま持ち上げる。順番はめくる順。
    pub fn lift(&mut self, count: usize) -> Vec<Card> {
        self.deck.draw_up_to(count)
    }

    /// カードを山札に戻す。最後のカードが次にめくられるよ。
    pub fn restock(&mut self, cards: Vec<Card>) -> Result<(), EngineError> {
        self.deck.recycle(cards)
    }

    /// 次にめくられるカード。
    pub fn top(&self) -> Option<&Card> {
        self.deck.top()
    }

    /// 山札のカード (下から上)。
    pub fn cards(&self) -> &[Card] {
        self.deck.undrawn()
    }

    pub fn len(&self) -> usize {
        self.deck.undrawn().len()
    }

    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deal_faces_cards_up_and_lift_does_not() {
        let mut stock = Stock::new(Deck::new());
        let dealt = stock.deal(3);
        assert_eq!(dealt.len(), 3);
        assert!(dealt.iter().all(Card::is_face_up));

        let lifted = stock.lift(2);
        assert!(lifted.iter().all(|c| !c.is_face_up()));
        assert_eq!(stock.len(), 47);
        assert_eq!(stock.deck().drawn().len(), 5);
    }

    #[test]
    fn restock_in_reverse_gives_the_same_order_back() {
        let mut stock = Stock::new(Deck::shuffled());
        let first = stock.deal(3);
        let mut back = first.clone();
        back.reverse();
        stock.restock(back).unwrap();
        assert_eq!(stock.len(), 52);

        let again = stock.deal(3);
        assert_eq!(again, first);
    }

    #[test]
    fn empty_stock_deals_nothing() {
        let mut stock = Stock::new(Deck::new());
        stock.lift(52);
        assert!(stock.is_empty());
        assert!(stock.top().is_none());
        assert!(stock.deal(3).is_empty());
    }
}
