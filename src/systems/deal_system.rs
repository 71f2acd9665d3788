// src/systems/deal_system.rs

use crate::components::deck::Deck;
use crate::components::pile::Pile;
use crate::config::rules::TABLEAU_COUNT;
use crate::error::EngineError;
use crate::world::World;

// === 初期カード配置システム！ ===
// ゲーム開始時に、7つの場札にカードを配って、残りを山札にする役割だよ。
#[derive(Default)]
pub struct DealInitialCardsSystem;

impl DealInitialCardsSystem {
    /// ゲームの初期カード配置を実行する関数だよ！ 🎉
    ///
    /// クロンダイクのルール通り、1段ずつ左から配っていく。
    /// - 場札 (Tableau): 1列目は1枚、2列目は2枚、... 7列目は7枚。一番上だけ表向き。
    /// - 山札 (Stock): 残りの24枚、全部裏向き。
    ///
    /// まだ1枚も引かれてないデッキを渡してね。
    pub fn execute(&self, deck: Deck) -> Result<World, EngineError> {
        if !deck.drawn().is_empty() {
            return Err(EngineError::InvalidState(format!(
                "cannot deal from a deck with {} cards already drawn",
                deck.drawn().len()
            )));
        }
        let mut world = World::with_deck(deck);

        for row in 0..TABLEAU_COUNT {
            for col in row..TABLEAU_COUNT {
                let Some(card) = world.stock.lift(1).pop() else {
                    return Err(EngineError::InvalidState("deck ran out while dealing".to_string()));
                };
                let tableau = &mut world.tableaus[col];
                if col == row {
                    // 各列の最後の1枚だけ表向き
                    tableau.push(card);
                } else {
                    tableau.bury(card);
                }
            }
        }

        world.rebuild_index();
        log::info!(
            "[Deal] 🃏 Dealt {} cards to the tableau, {} left in the stock.",
            world.tableaus().iter().map(Pile::len).sum::<usize>(),
            world.stock().len()
        );
        Ok(world)
    }
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::stack::PileId;

    #[test]
    fn test_initial_deal() {
        let world = DealInitialCardsSystem.execute(Deck::shuffled()).unwrap();

        // 山札は24枚、全部裏向き
        assert_eq!(world.stock().len(), 24);
        assert!(world.stock().cards().iter().all(|c| !c.is_face_up()));
        assert!(world.waste().is_empty());
        assert_eq!(world.foundation_card_count(), 0);

        // 場札は i 列目に i+1 枚、一番上だけ表向き
        for (i, tableau) in world.tableaus().iter().enumerate() {
            assert_eq!(tableau.len(), i + 1, "Tableau {} の枚数がおかしい", i);
            assert_eq!(tableau.playable().len(), 1);
            assert_eq!(tableau.buried().len(), i);
        }

        assert!(world.check_invariants(&[]).is_ok());
        println!("初期配置テスト、成功！🎉");
    }

    #[test]
    fn deal_follows_row_by_row_order() {
        // シャッフルしてないデッキなら、どのカードがどこに行くか決まってる
        let deck = Deck::new();
        let expected_first = deck.top().map(|c| c.id()).unwrap();
        let world = DealInitialCardsSystem.execute(deck).unwrap();

        // 1枚目は1列目の表向きカード
        let first = world.tableau(0).unwrap().top().map(|c| c.id());
        assert_eq!(first, Some(expected_first));
        assert_eq!(world.location_of(expected_first).map(|l| l.pile), Some(PileId::Tableau(0)));
    }

    #[test]
    fn partly_drawn_deck_is_rejected() {
        let mut deck = Deck::new();
        deck.draw();
        assert!(DealInitialCardsSystem.execute(deck).is_err());
    }
}
