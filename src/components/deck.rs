// src/components/deck.rs

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

use crate::components::card::{Card, CardId, Facing};
use crate::config::rules::DECK_SIZE;
use crate::error::EngineError;
use crate::logic::deck::{create_standard_deck, shuffle_deck, shuffle_deck_with};

/// 52枚のデッキだよ！🃏
///
/// カードは「まだ引かれてない (`undrawn`)」か「もう引かれた (`drawn`)」のどちらかに必ず属する。
/// `undrawn` がそのまま山札 (Stock) の中身で、最後の要素が次に引かれるカード。
/// `drawn` は台帳みたいなもので、引かれたカードの ID だけを覚えておく
/// (実物は場札や組札が持ってる)。順番は持たない集合なので、Undo で戻しても同じ台帳になる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    undrawn: Vec<Card>,
    drawn: BTreeSet<CardId>,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// 並び替え前の新品デッキ。全部裏向きで `undrawn` に入ってる。
    pub fn new() -> Self {
        Self { undrawn: create_standard_deck(), drawn: BTreeSet::new() }
    }

    /// シャッフル済みの新品デッキ。
    pub fn shuffled() -> Self {
        let mut deck = Self::new();
        deck.shuffle();
        deck
    }

    /// 乱数生成器を指定してシャッフル済みデッキを作る。
    pub fn shuffled_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::new();
        deck.shuffle_with(rng);
        deck
    }

    /// 山札の並び (下から上) を指定してデッキを作る。全部 undrawn 扱い。
    /// 52枚ちょうど、重複なしじゃないとエラー。
    pub fn from_order(cards: Vec<Card>) -> Result<Self, EngineError> {
        Self::from_parts(cards, Vec::new())
    }

    /// セーブデータからの復元用。`undrawn ∪ drawn` が52枚ちょうどかチェックする。
    pub fn from_parts(undrawn: Vec<Card>, drawn: Vec<CardId>) -> Result<Self, EngineError> {
        let mut seen = HashSet::with_capacity(DECK_SIZE);
        for id in undrawn.iter().map(Card::id).chain(drawn.iter().copied()) {
            if id.decode().is_none() || !seen.insert(id) {
                return Err(EngineError::InvalidState(format!("deck has duplicate or unknown card {:?}", id)));
            }
        }
        if seen.len() != DECK_SIZE {
            return Err(EngineError::InvalidState(format!("deck tracks {} cards, expected {}", seen.len(), DECK_SIZE)));
        }
        let mut undrawn = undrawn;
        for card in undrawn.iter_mut() {
            card.set_facing(Facing::FaceDown);
        }
        Ok(Self { undrawn, drawn: drawn.into_iter().collect() })
    }

    /// drawn も undrawn もまとめて一つの山に戻して、シャッフルする。
    pub fn shuffle(&mut self) {
        self.gather();
        shuffle_deck(&mut self.undrawn);
    }

    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.gather();
        shuffle_deck_with(&mut self.undrawn, rng);
    }

    fn gather(&mut self) {
        // drawn のカードは ID しか持ってないので、裏向きの新しいカードとして作り直す
        let returned = std::mem::take(&mut self.drawn)
            .into_iter()
            .filter_map(|id| id.decode())
            .map(|(suit, rank)| Card::new(suit, rank));
        self.undrawn.extend(returned);
        for card in self.undrawn.iter_mut() {
            card.set_facing(Facing::FaceDown);
        }
    }

    /// 1枚引く。山が空なら None。
    pub fn draw(&mut self) -> Option<Card> {
        let card = self.undrawn.pop()?;
        self.drawn.insert(card.id());
        Some(card)
    }

    /// 最大 n 枚引く。足りなければあるだけ返す (0枚もありえる)。
    /// 返す順番は引いた順。
    pub fn draw_up_to(&mut self, n: usize) -> Vec<Card> {
        let mut cards = Vec::with_capacity(n);
        while cards.len() < n {
            match self.draw() {
                Some(card) => cards.push(card),
                None => break,
            }
        }
        cards
    }

    /// カードを山に戻す。渡された順番に積むので、最後のカードが次に引かれる。
    /// 戻すカードは全部 drawn に載ってないとダメ。その場合は何も変更しない。
    pub fn recycle(&mut self, cards: Vec<Card>) -> Result<(), EngineError> {
        let mut returning = HashSet::with_capacity(cards.len());
        for card in &cards {
            let id = card.id();
            if !self.drawn.contains(&id) || !returning.insert(id) {
                return Err(EngineError::InvalidState(format!(
                    "cannot recycle {} because it was never drawn",
                    card
                )));
            }
        }
        for mut card in cards {
            self.drawn.remove(&card.id());
            card.set_facing(Facing::FaceDown);
            self.undrawn.push(card);
        }
        Ok(())
    }

    /// 「同じ配りでもう一回」用のコピー。
    pub fn snapshot(&self) -> Deck {
        self.clone()
    }

    /// 次に引かれるカード。
    pub fn top(&self) -> Option<&Card> {
        self.undrawn.last()
    }

    pub fn undrawn(&self) -> &[Card] {
        &self.undrawn
    }

    pub fn drawn(&self) -> &BTreeSet<CardId> {
        &self.drawn
    }

    pub fn is_empty(&self) -> bool {
        self.undrawn.is_empty()
    }
}
