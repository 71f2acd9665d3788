// src/systems/move_card_system.rs

use crate::components::card::{Card, CardId};
use crate::components::pile::Pile;
use crate::components::stack::PileId;
use crate::components::undo_log::{MoveKind, UndoRecord};
use crate::error::EngineError;
use crate::logic::rules::is_route_allowed;
use crate::world::World;

/// 持ち上げ中の run。カードは元の山から外れて、ここに預けられてる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// 持ち上げたカード (下から上)。
    pub cards: Vec<Card>,
    pub source: PileId,
    /// 元の山で run の一番下がいた位置。
    pub source_index: usize,
}

/// 置くのに成功した時の結果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub record: UndoRecord,
    /// 移動元の場札でめくれたカード。
    pub revealed: Option<Card>,
}

/// カードの持ち上げと配置を担当するシステムだよ！🚚
#[derive(Default)]
pub struct MoveCardSystem;

impl MoveCardSystem {
    /// `pile` の `card` から上を持ち上げる。
    ///
    /// 山札からは一番上のカードから `draw_count` 枚 (裏向きのまま)。
    /// それ以外は表向きの run だけ持ち上げられる。
    pub fn lift(&self, world: &mut World, pile: PileId, card: CardId, draw_count: usize) -> Result<Selection, EngineError> {
        if !pile.is_valid() {
            return Err(EngineError::UnknownPile(pile));
        }
        if world.pile_cards(pile)?.is_empty() {
            return Err(EngineError::EmptySource { pile, card: None });
        }

        let (cards, source_index) = match pile {
            PileId::Stock => {
                if world.stock.top().map(Card::id) != Some(card) {
                    return Err(EngineError::EmptySource { pile, card: Some(card) });
                }
                let cards = world.stock.lift(draw_count);
                (cards, world.stock.len())
            }
            _ => {
                let target = world.pile_mut(pile)?;
                let index = target.position_of(card).ok_or(EngineError::EmptySource { pile, card: Some(card) })?;
                let cards = target.pop_run(card).ok_or(EngineError::EmptySource { pile, card: Some(card) })?;
                (cards, index)
            }
        };

        world.forget(cards.iter().map(Card::id));
        log::debug!("[MoveCard] Lifted {} card(s) from {} at {}.", cards.len(), pile, source_index);
        Ok(Selection { cards, source: pile, source_index })
    }

    /// 持ち上げた run を元の山にそのまま戻す。
    pub fn return_to_source(&self, world: &mut World, selection: Selection) -> Result<(), EngineError> {
        let Selection { cards, source, .. } = selection;
        match source {
            PileId::Stock => {
                // 山札は最後のカードが次にめくられるので、逆順で戻す
                let mut cards = cards;
                cards.reverse();
                world.stock.restock(cards)?;
            }
            _ => world.pile_mut(source)?.push_run(cards),
        }
        world.reindex(source);
        Ok(())
    }

    /// 持ち上げた run を `target` に置こうとする。
    ///
    /// ダメだった時は、エラーと一緒に run をそのまま返すので、呼び出し側で元に戻してね。
    /// 成功したら、移動元の場札をめくって Undo 記録を返すよ。
    pub fn place(
        &self,
        world: &mut World,
        selection: Selection,
        target: PileId,
    ) -> Result<Placement, (EngineError, Selection)> {
        if !target.is_valid() {
            return Err((EngineError::UnknownPile(target), selection));
        }
        if !is_route_allowed(selection.source, target, selection.cards.len()) {
            return Err((EngineError::IllegalMove { target }, selection));
        }
        let accepts = match world.pile(target) {
            Ok(pile) => pile.can_accept(&selection.cards),
            Err(error) => return Err((error, selection)),
        };
        if !accepts {
            log::debug!("[MoveCard] {} rejected {} card(s) from {}.", target, selection.cards.len(), selection.source);
            return Err((EngineError::IllegalMove { target }, selection));
        }

        let Selection { cards, source, source_index } = selection;
        let ids: Vec<CardId> = cards.iter().map(Card::id).collect();
        let to_index = match world.pile_mut(target) {
            Ok(pile) => {
                let to_index = pile.len();
                pile.push_run(cards);
                to_index
            }
            // pile() が通ったので pile_mut() も通るはず
            Err(error) => return Err((error, Selection { cards, source, source_index })),
        };

        let revealed = match source {
            PileId::Tableau(index) => world.tableau_mut(index).ok().and_then(|t| t.reveal_next_buried()),
            _ => None,
        };
        world.reindex(target);
        world.reindex(source);

        let kind = if source == PileId::Stock { MoveKind::TapStock } else { MoveKind::MoveCard };
        log::debug!("[MoveCard] Moved {} card(s) {} -> {} ({:?}).", ids.len(), source, target, kind);
        Ok(Placement {
            record: UndoRecord {
                kind,
                cards: ids,
                from: source,
                from_index: Some(source_index),
                to: target,
                to_index: Some(to_index),
                revealed_source: revealed.is_some(),
            },
            revealed,
        })
    }
}
