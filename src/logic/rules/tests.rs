// src/logic/rules/tests.rs
//! rules モジュール内の関数のユニットテスト。

use super::*;
use crate::components::card::{Card, Rank, Suit};
use crate::components::stack::PileId;

// --- テスト用ヘルパー関数 ---
fn up(suit: Suit, rank: Rank) -> Card {
    Card::face_up(suit, rank)
}

// --- 各ルール関数のテスト ---

#[test]
fn test_colors_differ() {
    assert!(colors_differ(&up(Suit::Heart, Rank::Two), &up(Suit::Spade, Rank::Two)));
    assert!(colors_differ(&up(Suit::Club, Rank::Two), &up(Suit::Diamond, Rank::Two)));
    assert!(!colors_differ(&up(Suit::Heart, Rank::Two), &up(Suit::Diamond, Rank::Two)));
    assert!(!colors_differ(&up(Suit::Club, Rank::Two), &up(Suit::Spade, Rank::Two)));
    println!("色違いテスト、成功！🎉");
}

#[test]
fn test_can_move_to_foundation_rules() {
    // 空の組札にはエースだけ
    assert!(can_move_to_foundation(&up(Suit::Club, Rank::Ace), None));
    assert!(!can_move_to_foundation(&up(Suit::Club, Rank::Two), None));

    // ハートの5の上にはハートの6だけ
    let five_hearts = up(Suit::Heart, Rank::Five);
    assert!(can_move_to_foundation(&up(Suit::Heart, Rank::Six), Some(&five_hearts)));
    assert!(!can_move_to_foundation(&up(Suit::Diamond, Rank::Six), Some(&five_hearts)));
    assert!(!can_move_to_foundation(&up(Suit::Heart, Rank::Seven), Some(&five_hearts)));
    assert!(!can_move_to_foundation(&up(Suit::Heart, Rank::Four), Some(&five_hearts)));
    println!("Foundation 移動ルールテスト、成功！🎉");
}

#[test]
fn test_foundation_rejects_face_down_and_runs() {
    assert!(!can_accept_run_on_foundation(&[Card::new(Suit::Club, Rank::Ace)], None), "裏向きはダメ");
    assert!(!can_accept_run_on_foundation(&[], None));
    let two = [up(Suit::Club, Rank::Ace), up(Suit::Club, Rank::Two)];
    assert!(!can_accept_run_on_foundation(&two, None));
}

#[test]
fn test_can_move_to_tableau_rules() {
    // スペードの8には赤の7だけ
    let eight_spades = up(Suit::Spade, Rank::Eight);
    assert!(can_move_to_tableau(&up(Suit::Heart, Rank::Seven), Some(&eight_spades)));
    assert!(can_move_to_tableau(&up(Suit::Diamond, Rank::Seven), Some(&eight_spades)));
    assert!(!can_move_to_tableau(&up(Suit::Club, Rank::Seven), Some(&eight_spades)), "同色はダメ");
    assert!(!can_move_to_tableau(&up(Suit::Heart, Rank::Six), Some(&eight_spades)), "ランク違いはダメ");

    // 空の場札にはキングだけ
    assert!(can_move_to_tableau(&up(Suit::Spade, Rank::King), None));
    assert!(!can_move_to_tableau(&up(Suit::Heart, Rank::Queen), None));
    println!("Tableau 移動ルールテスト、成功！🎉");
}

#[test]
fn test_tableau_accepts_well_formed_runs_only() {
    let queen_hearts = up(Suit::Heart, Rank::Queen);
    let good = [up(Suit::Spade, Rank::Jack), up(Suit::Diamond, Rank::Ten), up(Suit::Club, Rank::Nine)];
    assert!(can_accept_run_on_tableau(&good, Some(&queen_hearts)));

    let same_color = [up(Suit::Spade, Rank::Jack), up(Suit::Club, Rank::Ten)];
    assert!(!can_accept_run_on_tableau(&same_color, Some(&queen_hearts)));

    let gap = [up(Suit::Spade, Rank::Jack), up(Suit::Diamond, Rank::Nine)];
    assert!(!can_accept_run_on_tableau(&gap, Some(&queen_hearts)));

    let face_down = [up(Suit::Spade, Rank::Jack), Card::new(Suit::Diamond, Rank::Ten)];
    assert!(!can_accept_run_on_tableau(&face_down, Some(&queen_hearts)));

    assert!(!can_accept_run_on_tableau(&[], None));
}

#[test]
fn test_ace_never_goes_to_tableau() {
    let two_spades = up(Suit::Spade, Rank::Two);
    // ランクと色だけなら A♥ は 2♠ に乗りそうだけど、エースは場札に置けない
    assert!(!can_accept_run_on_tableau(&[up(Suit::Heart, Rank::Ace)], Some(&two_spades)));
    assert!(!can_accept_run_on_tableau(&[up(Suit::Heart, Rank::Ace)], None));
}

#[test]
fn test_is_valid_run() {
    assert!(is_valid_run(&[up(Suit::Heart, Rank::Five)]));
    assert!(is_valid_run(&[up(Suit::Club, Rank::Six), up(Suit::Heart, Rank::Five), up(Suit::Spade, Rank::Four)]));
    assert!(!is_valid_run(&[up(Suit::Club, Rank::Six), up(Suit::Heart, Rank::Seven)]));
    assert!(!is_valid_run(&[Card::new(Suit::Club, Rank::Six)]));
}

#[test]
fn test_route_rules() {
    // 山札からは捨て札だけ
    assert!(is_route_allowed(PileId::Stock, PileId::Waste, 3));
    assert!(!is_route_allowed(PileId::Stock, PileId::Tableau(0), 1));
    assert!(!is_route_allowed(PileId::Stock, PileId::Foundation(0), 1));

    // 山札には何も置けない
    assert!(!is_route_allowed(PileId::Waste, PileId::Stock, 1));
    assert!(!is_route_allowed(PileId::Tableau(2), PileId::Stock, 1));

    // 捨て札には山札からだけ
    assert!(!is_route_allowed(PileId::Tableau(0), PileId::Waste, 1));
    assert!(!is_route_allowed(PileId::Foundation(0), PileId::Waste, 1));

    // 組札は1枚だけ、組札同士はなし
    assert!(is_route_allowed(PileId::Waste, PileId::Foundation(1), 1));
    assert!(is_route_allowed(PileId::Tableau(3), PileId::Foundation(1), 1));
    assert!(!is_route_allowed(PileId::Tableau(3), PileId::Foundation(1), 2));
    assert!(!is_route_allowed(PileId::Foundation(0), PileId::Foundation(1), 1));

    // 場札へはどこからでも (山札以外)
    assert!(is_route_allowed(PileId::Waste, PileId::Tableau(6), 1));
    assert!(is_route_allowed(PileId::Foundation(2), PileId::Tableau(6), 1));
    assert!(is_route_allowed(PileId::Tableau(0), PileId::Tableau(6), 5));

    // 同じ山、0枚はダメ
    assert!(!is_route_allowed(PileId::Tableau(1), PileId::Tableau(1), 1));
    assert!(!is_route_allowed(PileId::Waste, PileId::Tableau(1), 0));
}

#[test]
fn test_stock_waste_rules() {
    // ストックがある場合
    assert!(can_deal_from_stock(false), "ストックがあれば配れるはず");
    assert!(!can_reset_stock_from_waste(false, false), "ストックがある場合はリセットできないはず");
    assert!(!can_reset_stock_from_waste(false, true), "ストックがある場合はリセットできないはず");

    // ストックが空の場合
    assert!(!can_deal_from_stock(true), "ストックが空なら配れないはず");
    assert!(can_reset_stock_from_waste(true, false), "ストックが空でウェストにあればリセットできるはず");
    assert!(!can_reset_stock_from_waste(true, true), "ストックもウェストも空ならリセットできないはず");

    assert!(is_deal_size(1) && is_deal_size(3));
    assert!(!is_deal_size(0) && !is_deal_size(4));
    println!("Stock/Waste ルールテスト、成功！🎉");
}

#[test]
fn test_win_condition() {
    assert!(check_win_condition(52), "カードが52枚あればクリアなはず！🏆");
    assert!(!check_win_condition(51), "カードが51枚ではクリアじゃないはず！🙅");
    assert!(!check_win_condition(0), "カードが0枚ではクリアじゃないはず！🙅");
    println!("ゲームクリア判定テスト、成功！🎉");
}
