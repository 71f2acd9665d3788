// src/components/card.rs

// serde を使う宣言！カード情報をセーブデータにしたり JS 側に渡したりする時に使うよ！
use serde::{Deserialize, Serialize};
use std::fmt;

/// カードのスート（マーク）を表す列挙型だよ！♠️♦️♣️❤️
///
/// 並び順はスペード、ダイヤ、クラブ、ハートの順。`CardId` の計算にもこの順番を使うよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spade,   // ♠️
    Diamond, // ♦️
    Club,    // ♣️
    Heart,   // ❤️
}

/// 全スートの一覧。デッキ生成のループで使う！
pub const ALL_SUITS: [Suit; 4] = [Suit::Spade, Suit::Diamond, Suit::Club, Suit::Heart];

impl Suit {
    /// `ALL_SUITS` の中での位置 (0-3)。
    pub fn index(self) -> u8 {
        match self {
            Suit::Spade => 0,
            Suit::Diamond => 1,
            Suit::Club => 2,
            Suit::Heart => 3,
        }
    }

    /// スートから色を決めるよ。スペードとクラブは黒、ダイヤとハートは赤！
    pub fn color(self) -> CardColor {
        match self {
            Suit::Heart | Suit::Diamond => CardColor::Red,
            Suit::Club | Suit::Spade => CardColor::Black,
        }
    }

    fn symbol(self) -> char {
        match self {
            Suit::Spade => '♠',
            Suit::Diamond => '♦',
            Suit::Club => '♣',
            Suit::Heart => '♥',
        }
    }
}

/// カードのランク（数字）だよ！ A, 2, 3, ..., K
///
/// PartialOrd, Ord も derive してるから `Rank::Ten < Rank::Jack` みたいに比較できる！👍
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1, // A は 1
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,  // J (11)
    Queen, // Q (12)
    King,  // K (13)
}

/// 全ランクの一覧 (A から K まで)。
pub const ALL_RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

impl Rank {
    /// 1 (Ace) から 13 (King) までの数値。
    pub fn value(self) -> u8 {
        self as u8
    }

    /// 数値からランクを作る。1..=13 以外は None。
    pub fn from_value(value: u8) -> Option<Rank> {
        ALL_RANKS.get(usize::from(value).checked_sub(1)?).copied()
    }

    fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

/// カードの色（赤か黒か）。場札 (Tableau) の「色違い」ルールで使う！❤️🖤
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardColor {
    Red,
    Black,
}

/// カードの向き。表 (FaceUp) か裏 (FaceDown) か。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facing {
    FaceUp,
    FaceDown,
}

/// 52枚それぞれに割り当てる固定の ID (0-51)。
///
/// スートとランクの組み合わせはデッキの中で一意だから、そこから計算できる。
/// エンジンはこの ID をキーにして「どのカードがどこにあるか」を管理するよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u8);

impl CardId {
    pub fn new(suit: Suit, rank: Rank) -> Self {
        CardId(suit.index() * 13 + (rank.value() - 1))
    }

    /// ID からスートとランクに戻す。52 以上なら None。
    pub fn decode(self) -> Option<(Suit, Rank)> {
        let suit = *ALL_SUITS.get(usize::from(self.0 / 13))?;
        let rank = Rank::from_value(self.0 % 13 + 1)?;
        Some((suit, rank))
    }
}

/// カードそのもの！🃏
///
/// スートとランクは生成後に変わらない。変わるのは向き (`facing`) だけ。
/// どの山にいるかはカード自身は知らないよ (それは `World` の仕事)。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    pub facing: Facing,
}

impl Card {
    /// 裏向きのカードを作る。
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank, facing: Facing::FaceDown }
    }

    pub fn face_up(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank, facing: Facing::FaceUp }
    }

    pub fn id(&self) -> CardId {
        CardId::new(self.suit, self.rank)
    }

    pub fn color(&self) -> CardColor {
        self.suit.color()
    }

    pub fn is_face_up(&self) -> bool {
        self.facing == Facing::FaceUp
    }

    /// 向きをひっくり返す。
    pub fn flip(&mut self) {
        self.facing = match self.facing {
            Facing::FaceUp => Facing::FaceDown,
            Facing::FaceDown => Facing::FaceUp,
        };
    }

    pub fn set_facing(&mut self, facing: Facing) {
        self.facing = facing;
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_card() {
        let card = Card::new(Suit::Spade, Rank::Ace);

        assert_eq!(card.suit, Suit::Spade);
        assert_eq!(card.rank, Rank::Ace);
        assert!(!card.is_face_up(), "new() のカードは裏向きのはず");
        assert_eq!(card.to_string(), "A♠");
    }

    #[test]
    fn flip_and_set_facing() {
        let mut card = Card::new(Suit::Heart, Rank::Queen);
        card.flip();
        assert_eq!(card.facing, Facing::FaceUp);
        card.flip();
        assert_eq!(card.facing, Facing::FaceDown);
        card.set_facing(Facing::FaceUp);
        assert!(card.is_face_up());
    }

    #[test]
    fn color_is_derived_from_suit() {
        assert_eq!(Card::new(Suit::Spade, Rank::Two).color(), CardColor::Black);
        assert_eq!(Card::new(Suit::Club, Rank::Two).color(), CardColor::Black);
        assert_eq!(Card::new(Suit::Heart, Rank::Two).color(), CardColor::Red);
        assert_eq!(Card::new(Suit::Diamond, Rank::Two).color(), CardColor::Red);
    }

    #[test]
    fn rank_comparison() {
        assert!(Rank::Ace < Rank::Two);
        assert!(Rank::Ten < Rank::Jack);
        assert!(Rank::Queen < Rank::King);
        assert_eq!(Rank::King.value(), 13);
        assert_eq!(Rank::from_value(7), Some(Rank::Seven));
        assert_eq!(Rank::from_value(0), None);
        assert_eq!(Rank::from_value(14), None);
    }

    #[test]
    fn card_ids_are_unique_and_decodable() {
        let mut seen = std::collections::HashSet::new();
        for &suit in ALL_SUITS.iter() {
            for &rank in ALL_RANKS.iter() {
                let id = CardId::new(suit, rank);
                assert!(id.0 < 52);
                assert!(seen.insert(id), "ID が重複してる: {:?}", id);
                assert_eq!(id.decode(), Some((suit, rank)));
            }
        }
        assert_eq!(CardId(52).decode(), None);
        println!("CardId テスト、成功！🎉");
    }
}
