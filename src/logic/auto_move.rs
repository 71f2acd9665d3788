// src/logic/auto_move.rs
//! カードの自動移動に関するロジックをまとめるモジュールだよ！🪄✨
//! タップされた run をどこに置けばいいか、とかを判断するんだ。

use crate::components::card::Card;
use crate::components::pile::Pile;
use crate::components::stack::PileId;
use crate::config::rules::{FOUNDATION_COUNT, TABLEAU_COUNT};
use crate::logic::rules::is_route_allowed;
use crate::world::World;

/// 指定されたカードを置ける組札 (Foundation) を探す関数だよ。
/// 4つを番号順に見て、最初に受け付けてくれたものを返す。
pub fn find_automatic_foundation_move(world: &World, card: &Card) -> Option<PileId> {
    log::debug!("[AutoMove] Finding automatic foundation move for {}...", card);
    let run = std::slice::from_ref(card);
    let found = (0..FOUNDATION_COUNT as u8)
        .map(PileId::Foundation)
        .find(|&pile| world.pile(pile).map_or(false, |f| f.can_accept(run)));
    match found {
        Some(pile) => log::debug!("  Found valid foundation {} for {}.", pile, card),
        None => log::debug!("  No suitable foundation found for {}.", card),
    }
    found
}

/// run を置ける場札 (Tableau) を左から探す。`source` の列は飛ばすよ。
pub fn find_automatic_tableau_move(world: &World, run: &[Card], source: PileId) -> Option<PileId> {
    (0..TABLEAU_COUNT as u8)
        .map(PileId::Tableau)
        .filter(|&pile| is_route_allowed(source, pile, run.len()))
        .find(|&pile| world.pile(pile).map_or(false, |t| t.can_accept(run)))
}

/// タップされた run の置き場所を決める。
///
/// 1枚だけなら組札を優先して、次に場札。複数枚なら場札だけ。
/// 組札から組札への移動はしないよ。山札から持ち上げた分の行き先は捨て札だけ。
pub fn resolve_target(world: &World, run: &[Card], source: PileId) -> Option<PileId> {
    if source == PileId::Stock {
        let accepts = world.pile(PileId::Waste).map_or(false, |w| w.can_accept(run));
        return accepts.then_some(PileId::Waste);
    }
    if let [card] = run {
        if !matches!(source, PileId::Foundation(_)) {
            if let Some(pile) = find_automatic_foundation_move(world, card) {
                return Some(pile);
            }
        }
    }
    find_automatic_tableau_move(world, run, source)
}
