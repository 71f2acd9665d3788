// src/world.rs

// HashMap: カード ID から「今どこにいるか」を引くための索引に使う！
use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::components::card::{Card, CardId};
use crate::components::deck::Deck;
use crate::components::foundation::Foundation;
use crate::components::pile::Pile;
use crate::components::stack::{Location, PileId};
use crate::components::stock::Stock;
use crate::components::tableau::Tableau;
use crate::components::waste::Waste;
use crate::config::rules::{DECK_SIZE, FOUNDATION_COUNT, TABLEAU_COUNT};
use crate::error::EngineError;

/// World（ワールド）は、テーブルの上にある全部の山を持ってる中心的な存在だよ！🫡
///
/// 山札 1つ、捨て札 1つ、組札 4つ、場札 7列。
/// それに加えて「カード ID → 場所」の索引を持ってて、どのカードがどこにあるかすぐ答えられる。
/// 索引はセーブデータには入れない (復元した時に作り直す)。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    pub(crate) stock: Stock,
    pub(crate) waste: Waste,
    pub(crate) foundations: Vec<Foundation>,
    pub(crate) tableaus: Vec<Tableau>,
    #[serde(skip)]
    locations: HashMap<CardId, Location>,
}

impl PartialEq for World {
    // 索引は山の中身から決まるので比べなくていい
    fn eq(&self, other: &Self) -> bool {
        self.stock == other.stock
            && self.waste == other.waste
            && self.foundations == other.foundations
            && self.tableaus == other.tableaus
    }
}

impl Default for World {
    fn default() -> Self {
        Self::with_deck(Deck::new())
    }
}

impl World {
    /// デッキを丸ごと山札に入れた World を作るよ。他の山は全部空っぽ。
    pub fn with_deck(deck: Deck) -> Self {
        let mut world = World {
            stock: Stock::new(deck),
            waste: Waste::new(),
            foundations: vec![Foundation::new(); FOUNDATION_COUNT],
            tableaus: vec![Tableau::new(); TABLEAU_COUNT],
            locations: HashMap::with_capacity(DECK_SIZE),
        };
        world.rebuild_index();
        world
    }

    // --- 山へのアクセス ---

    pub fn stock(&self) -> &Stock {
        &self.stock
    }

    pub fn waste(&self) -> &Waste {
        &self.waste
    }

    pub fn foundations(&self) -> &[Foundation] {
        &self.foundations
    }

    pub fn tableaus(&self) -> &[Tableau] {
        &self.tableaus
    }

    pub fn foundation(&self, index: u8) -> Result<&Foundation, EngineError> {
        self.foundations
            .get(usize::from(index))
            .ok_or(EngineError::UnknownPile(PileId::Foundation(index)))
    }

    pub fn tableau(&self, index: u8) -> Result<&Tableau, EngineError> {
        self.tableaus
            .get(usize::from(index))
            .ok_or(EngineError::UnknownPile(PileId::Tableau(index)))
    }

    pub(crate) fn tableau_mut(&mut self, index: u8) -> Result<&mut Tableau, EngineError> {
        self.tableaus
            .get_mut(usize::from(index))
            .ok_or(EngineError::UnknownPile(PileId::Tableau(index)))
    }

    /// 山札以外の山を `Pile` として借りる。
    pub fn pile(&self, pile: PileId) -> Result<&dyn Pile, EngineError> {
        match pile {
            PileId::Stock => Err(EngineError::InvalidState("the stock is not a face-up pile".to_string())),
            PileId::Waste => Ok(&self.waste as &dyn Pile),
            PileId::Foundation(index) => Ok(self.foundation(index)? as &dyn Pile),
            PileId::Tableau(index) => Ok(self.tableau(index)? as &dyn Pile),
        }
    }

    pub(crate) fn pile_mut(&mut self, pile: PileId) -> Result<&mut dyn Pile, EngineError> {
        match pile {
            PileId::Stock => Err(EngineError::InvalidState("the stock is not a face-up pile".to_string())),
            PileId::Waste => Ok(&mut self.waste as &mut dyn Pile),
            PileId::Foundation(index) => self
                .foundations
                .get_mut(usize::from(index))
                .map(|f| f as &mut dyn Pile)
                .ok_or(EngineError::UnknownPile(pile)),
            PileId::Tableau(index) => self.tableau_mut(index).map(|t| t as &mut dyn Pile),
        }
    }

    /// どの山でもカードの並び (下から上) を返す。
    pub fn pile_cards(&self, pile: PileId) -> Result<&[Card], EngineError> {
        match pile {
            PileId::Stock => Ok(self.stock.cards()),
            _ => Ok(self.pile(pile)?.cards()),
        }
    }

    /// その山の一番上のカード。山札なら次にめくられるカード。
    pub fn top_card(&self, pile: PileId) -> Option<&Card> {
        self.pile_cards(pile).ok()?.last()
    }

    // --- 場所の索引 ---

    /// カードが今どこにあるか。選択中で手に持ってるカードは None。
    pub fn location_of(&self, id: CardId) -> Option<Location> {
        self.locations.get(&id).copied()
    }

    /// 山の中身が変わったら呼ぶ。その山のカード全部の場所を書き直すよ。
    pub(crate) fn reindex(&mut self, pile: PileId) {
        let entries: Vec<(CardId, Location)> = match self.pile_cards(pile) {
            Ok(cards) => cards
                .iter()
                .enumerate()
                .map(|(index, card)| (card.id(), Location::new(pile, index)))
                .collect(),
            Err(_) => return,
        };
        self.locations.extend(entries);
    }

    /// 手に持ったカードを索引から外す。
    pub(crate) fn forget(&mut self, ids: impl IntoIterator<Item = CardId>) {
        for id in ids {
            self.locations.remove(&id);
        }
    }

    pub(crate) fn rebuild_index(&mut self) {
        self.locations.clear();
        for pile in PileId::all() {
            self.reindex(pile);
        }
    }

    // --- 集計とチェック ---

    pub fn foundation_card_count(&self) -> usize {
        self.foundations.iter().map(Pile::len).sum()
    }

    /// テーブルの上にあるカードの枚数 (手に持ってる分は含まない)。
    pub fn card_count(&self) -> usize {
        self.stock.len()
            + self.waste.len()
            + self.foundation_card_count()
            + self.tableaus.iter().map(Pile::len).sum::<usize>()
    }

    /// 52枚がちゃんとそろってるかチェックする。
    ///
    /// `held` は選択中で手に持ってるカード。
    /// 山札の外にあるカードは、デッキの「引かれた」台帳とぴったり一致しないとダメ。
    pub fn check_invariants(&self, held: &[Card]) -> Result<(), EngineError> {
        let mut seen = HashSet::with_capacity(DECK_SIZE);
        let mut drawn = HashSet::with_capacity(DECK_SIZE);
        let table = self
            .waste
            .cards()
            .iter()
            .chain(self.foundations.iter().flat_map(|f| f.cards().iter()))
            .chain(self.tableaus.iter().flat_map(|t| t.cards().iter()))
            .chain(held.iter());
        for card in table {
            if !seen.insert(card.id()) {
                return Err(EngineError::InvalidState(format!("card {} appears twice", card)));
            }
            drawn.insert(card.id());
        }
        for card in self.stock.cards() {
            if !seen.insert(card.id()) {
                return Err(EngineError::InvalidState(format!("card {} appears twice", card)));
            }
        }
        if seen.len() != DECK_SIZE {
            return Err(EngineError::InvalidState(format!(
                "{} cards on the table, expected {}",
                seen.len(),
                DECK_SIZE
            )));
        }
        let ledger: HashSet<CardId> = self.stock.deck().drawn().iter().copied().collect();
        if ledger != drawn {
            return Err(EngineError::InvalidState("deck ledger does not match the cards outside the stock".to_string()));
        }
        Ok(())
    }

    /// セーブデータから復元した World が遊べる形か、全部チェックする。
    /// OK なら索引も作り直すよ。
    pub(crate) fn validate_restored(&mut self) -> Result<(), EngineError> {
        if self.foundations.len() != FOUNDATION_COUNT || self.tableaus.len() != TABLEAU_COUNT {
            return Err(EngineError::InvalidState(format!(
                "expected {} foundations and {} tableaus, got {} and {}",
                FOUNDATION_COUNT,
                TABLEAU_COUNT,
                self.foundations.len(),
                self.tableaus.len()
            )));
        }
        // デッキの台帳そのものの形 (52枚ちょうど) もチェック
        Deck::from_parts(self.stock.cards().to_vec(), self.stock.deck().drawn().iter().copied().collect())?;
        for tableau in &self.tableaus {
            tableau.validate()?;
        }
        for (index, foundation) in self.foundations.iter().enumerate() {
            let ordered = foundation.cards().iter().enumerate().all(|(rank_index, card)| {
                card.is_face_up() && Some(card.suit) == foundation.suit() && usize::from(card.rank.value()) == rank_index + 1
            });
            if !ordered {
                return Err(EngineError::InvalidState(format!("foundation {} is out of order", index)));
            }
        }
        if !self.waste.cards().iter().all(Card::is_face_up) {
            return Err(EngineError::InvalidState("waste has a face-down card".to_string()));
        }
        self.check_invariants(&[])?;
        self.rebuild_index();
        Ok(())
    }
}

#[cfg(test)]
impl World {
    /// 山札の並びを崩さずに、指定のカードだけ引き抜く (テスト用)。
    /// 引き抜いたカードは裏向きのまま返すよ。
    pub(crate) fn take_from_stock(&mut self, id: CardId) -> Card {
        let mut lifted = self.stock.lift(DECK_SIZE);
        let pos = lifted.iter().position(|c| c.id() == id).expect("card should still be in the stock");
        let card = lifted.remove(pos);
        lifted.reverse();
        self.stock.restock(lifted).expect("restocking drawn cards");
        self.forget([id]);
        card
    }
}
