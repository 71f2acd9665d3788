// src/systems/undo_system.rs

use crate::components::card::{Card, CardId};
use crate::components::pile::Pile;
use crate::components::stack::PileId;
use crate::components::undo_log::{MoveKind, UndoRecord};
use crate::error::EngineError;
use crate::world::World;

/// Undo 記録を逆再生して、テーブルを1手前に戻すシステムだよ！↩️
///
/// まず記録とテーブルが食い違ってないか全部チェックして、それから戻す。
/// チェックで引っかかったら何も変えずに `MalformedUndo` を返すよ。
#[derive(Default)]
pub struct UndoSystem;

impl UndoSystem {
    pub fn undo(&self, world: &mut World, record: &UndoRecord) -> Result<(), EngineError> {
        if let Err(reason) = self.check(world, record) {
            log::error!("[Undo] ❌ Record {:?} does not match the table: {}", record.kind, reason);
            return Err(EngineError::MalformedUndo(reason));
        }

        match record.kind {
            MoveKind::MoveCard => self.undo_move(world, record)?,
            MoveKind::TapStock => self.undo_tap_stock(world, record)?,
            MoveKind::ResetWastePile => self.undo_reset(world, record)?,
        }
        log::info!("[Undo] Reverted {:?} ({} card(s)) {} -> {}.", record.kind, record.cards.len(), record.from, record.to);
        Ok(())
    }

    /// 記録通りに戻せるかどうか。ダメなら理由を返す。
    fn check(&self, world: &World, record: &UndoRecord) -> Result<(), String> {
        if record.cards.is_empty() {
            return Err("record has no cards".to_string());
        }
        let (expect_from, expect_to) = match record.kind {
            MoveKind::MoveCard => (record.from != PileId::Stock, record.to != PileId::Stock),
            MoveKind::TapStock => (record.from == PileId::Stock, record.to == PileId::Waste),
            MoveKind::ResetWastePile => (record.from == PileId::Waste, record.to == PileId::Stock),
        };
        if !expect_from || !expect_to {
            return Err(format!("{:?} cannot go from {} to {}", record.kind, record.from, record.to));
        }
        let to_cards = world.pile_cards(record.to).map_err(|e| e.to_string())?;
        let from_cards = world.pile_cards(record.from).map_err(|e| e.to_string())?;

        match record.kind {
            MoveKind::MoveCard | MoveKind::TapStock => {
                if !ends_with_ids(to_cards, &record.cards) {
                    return Err(format!("the cards are not on top of {}", record.to));
                }
                if let Some(to_index) = record.to_index {
                    if to_index.checked_add(record.cards.len()) != Some(to_cards.len()) {
                        return Err(format!("{} has moved since the record was made", record.to));
                    }
                }
                if let Some(from_index) = record.from_index {
                    if from_index != from_cards.len() {
                        return Err(format!("{} has changed since the record was made", record.from));
                    }
                }
                if record.kind == MoveKind::TapStock {
                    let ledger = world.stock().deck().drawn();
                    if !record.cards.iter().all(|id| ledger.contains(id)) {
                        return Err("dealt cards are missing from the deck ledger".to_string());
                    }
                }
                if record.revealed_source {
                    let PileId::Tableau(index) = record.from else {
                        return Err(format!("only a tableau can be revealed, not {}", record.from));
                    };
                    let tableau = world.tableau(index).map_err(|e| e.to_string())?;
                    if tableau.playable().len() != 1 {
                        return Err(format!("{} has no single revealed card to bury", record.from));
                    }
                }
            }
            MoveKind::ResetWastePile => {
                if !from_cards.is_empty() {
                    return Err("waste is not empty".to_string());
                }
                // 山札の上から順に、捨て札の下からの順番と同じはず
                let stock_top_down: Vec<CardId> = to_cards.iter().rev().map(Card::id).collect();
                if stock_top_down != record.cards {
                    return Err("stock does not hold exactly the recycled waste".to_string());
                }
            }
        }
        Ok(())
    }

    fn undo_move(&self, world: &mut World, record: &UndoRecord) -> Result<(), EngineError> {
        let bottom = record.cards[0];
        let cards = world
            .pile_mut(record.to)?
            .pop_run(bottom)
            .ok_or_else(|| EngineError::MalformedUndo(format!("cannot lift the run back off {}", record.to)))?;
        if record.revealed_source {
            if let PileId::Tableau(index) = record.from {
                world.tableau_mut(index)?.unreveal_last();
            }
        }
        world.pile_mut(record.from)?.push_run(cards);
        world.reindex(record.to);
        world.reindex(record.from);
        Ok(())
    }

    fn undo_tap_stock(&self, world: &mut World, record: &UndoRecord) -> Result<(), EngineError> {
        // 上から取るので [c3, c2, c1] の順になる。このまま積めば c1 が山札の一番上
        let mut cards = Vec::with_capacity(record.cards.len());
        for _ in 0..record.cards.len() {
            if let Some(card) = world.waste.pop() {
                cards.push(card);
            }
        }
        world.stock.restock(cards)?;
        world.reindex(PileId::Stock);
        Ok(())
    }

    fn undo_reset(&self, world: &mut World, record: &UndoRecord) -> Result<(), EngineError> {
        let cards = world.stock.deal(record.cards.len());
        world.waste.push_run(cards);
        world.reindex(PileId::Waste);
        Ok(())
    }
}

fn ends_with_ids(cards: &[Card], ids: &[CardId]) -> bool {
    cards.len() >= ids.len() && cards[cards.len() - ids.len()..].iter().map(Card::id).eq(ids.iter().copied())
}
