// src/components/waste.rs

use serde::{Deserialize, Serialize};

use crate::components::card::{Card, CardId, Facing};
use crate::components::pile::Pile;
use crate::logic::rules::stock_waste::is_deal_size;

/// 捨て札 (Waste)。山札からめくったカードが表向きで積まれる場所だよ。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Waste {
    cards: Vec<Card>,
}

impl Waste {
    pub fn new() -> Self {
        Self::default()
    }

    /// 画面で扇状に見せる上の n 枚 (下から上)。
    pub fn fanned(&self, n: usize) -> &[Card] {
        let start = self.cards.len().saturating_sub(n);
        &self.cards[start..]
    }

    /// 全部山札に戻すために取り出す。
    ///
    /// 返り値は上から下の順 (つまり逆順) で、全部裏向き。
    /// この順番で山札に積めば、次の周でも同じ順番でめくれるよ。
    pub fn recycle_to_stock(&mut self) -> Vec<Card> {
        let mut cards: Vec<Card> = self.cards.drain(..).rev().collect();
        for card in cards.iter_mut() {
            card.set_facing(Facing::FaceDown);
        }
        cards
    }
}

impl Pile for Waste {
    fn cards(&self) -> &[Card] {
        &self.cards
    }

    fn push(&mut self, mut card: Card) {
        card.set_facing(Facing::FaceUp);
        self.cards.push(card);
    }

    fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// 捨て札から持ち上げられるのは一番上だけ。
    fn pop_run(&mut self, from: CardId) -> Option<Vec<Card>> {
        match self.cards.last() {
            Some(top) if top.id() == from => self.cards.pop().map(|card| vec![card]),
            _ => None,
        }
    }

    /// 1回のめくりで来る枚数ならOK。どこから来たかは経路チェックが見る。
    fn can_accept(&self, run: &[Card]) -> bool {
        is_deal_size(run.len())
    }
}
