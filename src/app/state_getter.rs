//! Gets the current game state and converts it to display data / JSON.

use log::error;

use crate::components::card::Card;
use crate::components::stack::PileId;
use crate::game::Game;
use crate::protocol::{CardData, GameStateData};

/// ゲームの状態を、UI が描画に使うデータにまとめる。
pub fn collect_game_state(game: &Game) -> GameStateData {
    let world = game.world();
    let mut cards = Vec::with_capacity(crate::config::rules::DECK_SIZE);

    for pile in PileId::all() {
        let Ok(pile_cards) = world.pile_cards(pile) else {
            continue;
        };
        for (position_in_pile, card) in pile_cards.iter().enumerate() {
            cards.push(CardData {
                id: card.id(),
                suit: card.suit,
                rank: card.rank,
                is_face_up: card.is_face_up(),
                pile,
                position_in_pile,
            });
        }
    }

    GameStateData {
        status: game.status(),
        cards,
        stock_count: world.stock().len(),
        waste_fan: world.waste().fanned(game.config().draw_count).iter().map(Card::id).collect(),
        undo_available: game.can_undo(),
        selection: game.selection(),
    }
}

/// ゲームの状態を JSON 文字列として返します。
pub fn get_game_state_json(game: &Game) -> Result<String, String> {
    let data = collect_game_state(game);
    serde_json::to_string(&data).map_err(|e| {
        let error_msg = format!("Failed to serialize game state: {}", e);
        error!("{}", error_msg);
        error_msg
    })
}
