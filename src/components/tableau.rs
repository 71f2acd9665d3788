// src/components/tableau.rs

use serde::{Deserialize, Serialize};

use crate::components::card::{Card, CardId, Facing};
use crate::components::pile::Pile;
use crate::error::EngineError;
use crate::logic::rules::common::is_valid_run;
use crate::logic::rules::tableau::can_accept_run_on_tableau;

/// 場札 (Tableau) の1列だよ！
///
/// 下の方に裏向きのカード (`buried`) が埋まってて、その上に表向きのカード (`playable`) が並ぶ。
/// 実体は1本の Vec で、`first_face_up` より前が buried、そこから後ろが playable。
/// 裏向きのカードが表向きのカードより上に来ることはないよ。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tableau {
    cards: Vec<Card>,
    first_face_up: usize,
}

impl Tableau {
    pub fn new() -> Self {
        Self::default()
    }

    /// 裏向きのカードを埋める。表向きのカードがあってもその下に入るよ。
    pub fn bury(&mut self, mut card: Card) {
        card.set_facing(Facing::FaceDown);
        self.cards.insert(self.first_face_up, card);
        self.first_face_up += 1;
    }

    /// 裏向きのカード (下から上)。
    pub fn buried(&self) -> &[Card] {
        &self.cards[..self.first_face_up]
    }

    /// 表向きのカード (下から上)。
    pub fn playable(&self) -> &[Card] {
        &self.cards[self.first_face_up..]
    }

    /// `id` から上の run を覗く。`id` が表向きの列にいなければ None。
    pub fn liftable_run(&self, id: CardId) -> Option<&[Card]> {
        let offset = self.playable().iter().position(|card| card.id() == id)?;
        Some(&self.playable()[offset..])
    }

    /// 表向きのカードがなくなってたら、一番上の裏向きカードをめくる。
    /// めくったカードを返すよ。めくらなかったら None。
    pub fn reveal_next_buried(&mut self) -> Option<Card> {
        if !self.playable().is_empty() || self.first_face_up == 0 {
            return None;
        }
        self.first_face_up -= 1;
        let card = &mut self.cards[self.first_face_up];
        card.set_facing(Facing::FaceUp);
        Some(card.clone())
    }

    /// `reveal_next_buried` の逆。表向きが1枚だけの時に、それを裏返して埋め戻す。
    pub fn unreveal_last(&mut self) -> bool {
        if self.playable().len() != 1 {
            return false;
        }
        if let Some(card) = self.cards.last_mut() {
            card.set_facing(Facing::FaceDown);
        }
        self.first_face_up += 1;
        true
    }

    /// 復元したデータが「下が裏、上が表」の形で、表の部分がちゃんと run になってるか確認する。
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.first_face_up > self.cards.len() {
            return Err(EngineError::InvalidState(format!(
                "tableau boundary {} is past its {} cards",
                self.first_face_up,
                self.cards.len()
            )));
        }
        let buried_ok = self.buried().iter().all(|card| !card.is_face_up());
        let playable_ok = self.playable().iter().all(Card::is_face_up);
        if !buried_ok || !playable_ok {
            return Err(EngineError::InvalidState("tableau has a card facing the wrong way".to_string()));
        }
        if !is_valid_run(self.playable()) {
            return Err(EngineError::InvalidState("tableau face-up cards are not a descending alternating run".to_string()));
        }
        Ok(())
    }
}

impl Pile for Tableau {
    fn cards(&self) -> &[Card] {
        &self.cards
    }

    fn push(&mut self, mut card: Card) {
        card.set_facing(Facing::FaceUp);
        self.cards.push(card);
    }

    /// 表向きの一番上を取る。裏向きしか残ってなければ取れない。
    fn pop(&mut self) -> Option<Card> {
        if self.playable().is_empty() {
            return None;
        }
        self.cards.pop()
    }

    fn pop_run(&mut self, from: CardId) -> Option<Vec<Card>> {
        let offset = self.playable().iter().position(|card| card.id() == from)?;
        Some(self.cards.split_off(self.first_face_up + offset))
    }

    fn can_accept(&self, run: &[Card]) -> bool {
        if self.playable().is_empty() && !self.buried().is_empty() {
            // 裏向きだけが残ってる列には何も置けない (普通はすぐめくられる)
            return false;
        }
        can_accept_run_on_tableau(run, self.top())
    }
}
