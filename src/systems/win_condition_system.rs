// src/systems/win_condition_system.rs

use crate::components::game_state::GameStatus;
use crate::logic::rules::check_win_condition;
use crate::world::World;

/// ゲームの勝利条件をチェックするシステムだよ！🏆🎉
///
/// 現在の World の状態を見て、勝利条件（すべてのカードが組札にあるか）
/// を満たしているか判定し、満たしていればステータスを更新するよ。
#[derive(Default)]
pub struct WinConditionSystem;

impl WinConditionSystem {
    pub fn new() -> Self {
        Self {}
    }

    /// 勝利条件をチェックして、必要ならゲーム状態を更新するよ！
    /// 今回の呼び出しで勝利になったら true (もう勝ってたら false)。
    pub fn run(&self, world: &World, status: &mut GameStatus) -> bool {
        if *status != GameStatus::Playing {
            return false;
        }
        if check_win_condition(world.foundation_card_count()) {
            log::info!("[WinCondition] 勝利条件達成！🏆 ゲーム状態を更新します。");
            *status = GameStatus::Won;
            return true;
        }
        false
    }
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::deck::Deck;
    use crate::components::pile::Pile;

    /// 全部のカードを組札に並べた World を作る。
    fn solved_world() -> World {
        let mut world = World::with_deck(Deck::new());
        // 新品デッキは ♥ の K が一番上なので、引いた順の逆に並べる
        let mut cards = world.stock.lift(52);
        cards.reverse();
        for (i, chunk) in cards.chunks(13).enumerate() {
            for card in chunk {
                world.foundations[i].push(card.clone());
            }
        }
        world
    }

    #[test]
    fn test_win_condition_met() {
        let world = solved_world();
        let mut status = GameStatus::Playing;
        assert!(WinConditionSystem::new().run(&world, &mut status));
        assert_eq!(status, GameStatus::Won);
        assert!(world.foundations().iter().all(|f| f.is_complete()));

        // 2回目は何も起きない
        assert!(!WinConditionSystem::new().run(&world, &mut status));
        println!("勝利判定テスト、成功！🎉");
    }

    #[test]
    fn test_win_condition_not_met() {
        let world = World::with_deck(Deck::new());
        let mut status = GameStatus::Playing;
        assert!(!WinConditionSystem::new().run(&world, &mut status));
        assert_eq!(status, GameStatus::Playing);
    }
}
