// src/components/pile.rs

use crate::components::card::{Card, CardId};

/// カードの山に共通する操作をまとめたトレイトだよ。
///
/// 組札 (Foundation)、場札 (Tableau)、捨て札 (Waste) がこれを実装する。
/// カードは下から上の順番で並んでて、一番最後が「一番上 (top)」。
pub trait Pile {
    /// 山のカード全部 (下から上)。
    fn cards(&self) -> &[Card];

    /// 1枚積む。
    fn push(&mut self, card: Card);

    /// 一番上を1枚取る。取れるカードがなければ None。
    fn pop(&mut self) -> Option<Card>;

    /// `from` から上を全部持ち上げる。見つからない、または持ち上げられないなら None。
    fn pop_run(&mut self, from: CardId) -> Option<Vec<Card>>;

    /// この run を今の一番上に置けるか。
    fn can_accept(&self, run: &[Card]) -> bool;

    fn top(&self) -> Option<&Card> {
        self.cards().last()
    }

    fn is_empty(&self) -> bool {
        self.cards().is_empty()
    }

    fn len(&self) -> usize {
        self.cards().len()
    }

    /// まとめて積む。順番は run の先頭から。
    fn push_run(&mut self, run: Vec<Card>) {
        for card in run {
            self.push(card);
        }
    }

    fn position_of(&self, id: CardId) -> Option<usize> {
        self.cards().iter().position(|card| card.id() == id)
    }

    fn contains(&self, id: CardId) -> bool {
        self.position_of(id).is_some()
    }
}
