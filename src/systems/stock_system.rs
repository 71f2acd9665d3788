// src/systems/stock_system.rs
//! Handles tapping the Stock pile: dealing to the Waste, or turning the Waste back over.

use log::{info, warn};

use crate::components::card::Card;
use crate::components::pile::Pile;
use crate::components::stack::PileId;
use crate::components::undo_log::{MoveKind, UndoRecord};
use crate::error::EngineError;
use crate::logic::rules::stock_waste;
use crate::world::World;

#[derive(Default)]
pub struct StockSystem;

impl StockSystem {
    /// Deals up to `draw_count` cards from the Stock onto the Waste, face up.
    /// The first card dealt ends up lowest on the Waste.
    pub fn deal_from_stock(&self, world: &mut World, draw_count: usize) -> Result<UndoRecord, EngineError> {
        info!("Attempting to deal {} card(s) from Stock to Waste...", draw_count);

        if !stock_waste::can_deal_from_stock(world.stock().is_empty()) {
            info!("  Stock is empty. Cannot deal.");
            return Err(EngineError::EmptySource { pile: PileId::Stock, card: None });
        }

        let to_index = world.waste().len();
        let dealt = world.stock.deal(draw_count);
        let from_index = world.stock().len();
        let ids = dealt.iter().map(Card::id).collect();
        world.waste.push_run(dealt);
        world.reindex(PileId::Waste);

        info!("  Dealt to Waste. Stock has {} card(s) left.", from_index);
        Ok(UndoRecord {
            kind: MoveKind::TapStock,
            cards: ids,
            from: PileId::Stock,
            from_index: Some(from_index),
            to: PileId::Waste,
            to_index: Some(to_index),
            revealed_source: false,
        })
    }

    /// Turns the whole Waste back over onto the empty Stock.
    /// The next pass deals the cards in the same order as the last one.
    pub fn reset_waste_to_stock(&self, world: &mut World) -> Result<UndoRecord, EngineError> {
        info!("Attempting to reset Waste to Stock...");

        if !stock_waste::can_reset_stock_from_waste(world.stock().is_empty(), world.waste().is_empty()) {
            info!("  Cannot reset Waste to Stock (Stock not empty or Waste empty).");
            return Err(EngineError::IllegalMove { target: PileId::Stock });
        }

        let ids = world.waste().cards().iter().map(Card::id).collect();
        let cards = world.waste.recycle_to_stock();
        if let Err(error) = world.stock.restock(cards.clone()) {
            warn!("  Stock refused the Waste cards: {}", error);
            for card in cards.into_iter().rev() {
                world.waste.push(card);
            }
            return Err(error);
        }
        world.reindex(PileId::Stock);

        info!("  Waste pile reset to Stock complete ({} cards).", world.stock().len());
        Ok(UndoRecord {
            kind: MoveKind::ResetWastePile,
            cards: ids,
            from: PileId::Waste,
            from_index: Some(0),
            to: PileId::Stock,
            to_index: Some(0),
            revealed_source: false,
        })
    }
}
