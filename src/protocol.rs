// src/protocol.rs

// このファイルは、エンジンと呼び出し側 (UI や JS) の間で
// やり取りするデータの形式を定義するよ！💌
// `Serialize` は Rust のデータ構造 -> JSON 文字列 にするやつ、
// `Deserialize` は JSON 文字列 -> Rust のデータ構造 にするやつだよ。
use serde::{Deserialize, Serialize};

use crate::components::card::{Card, CardId, Rank, Suit};
use crate::components::deck::Deck;
use crate::components::game_state::GameStatus;
use crate::components::stack::PileId;
use crate::components::undo_log::{MoveKind, UndoLog};
use crate::config::GameConfig;
use crate::world::World;

// --- 操作の結果 ---

/// 持ち上げた run の情報。`select_run` が返すよ。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub source: PileId,
    /// 持ち上げたカード (下から上)。
    pub cards: Vec<Card>,
}

/// 置こうとした結果。
/// 失敗した時は `success` が false で、run は元の場所に戻ってるよ。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PlacementResult {
    pub success: bool,
    pub source: PileId,
    /// 置いた先。失敗したら None。
    pub destination: Option<PileId>,
    /// 移動元の場札でめくれたカード。
    pub revealed_card: Option<Card>,
}

impl PlacementResult {
    /// 置けなかった時の結果。run は `source` に戻ってる。
    pub(crate) fn failed(source: PileId) -> Self {
        PlacementResult { success: false, source, destination: None, revealed_card: None }
    }
}

/// UI に知らせるための出来事。キューに溜まって、`drain_events` で取り出す。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// 1手進んだ (Undo 記録が積まれた)。
    MoveRecorded { kind: MoveKind, undo_available: bool },
    /// 1手戻った。
    MoveUndone { kind: MoveKind, undo_available: bool },
    /// 場札の裏向きカードがめくれた。
    CardRevealed { pile: PileId, card: Card },
    /// 勝利！🏆 1ゲームに1回だけ。
    GameWon,
}

// --- セーブデータ ---

/// 保存するゲーム全体。これだけあれば続きから遊べるよ。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SavedGame {
    pub config: GameConfig,
    pub status: GameStatus,
    pub world: World,
    pub undo_log: UndoLog,
    /// 「同じ配りでもう一回」用の最初の並び。
    pub original_deal: Option<Deck>,
}

// --- UI に渡す表示用データ ---

/// ゲームの状態全体を表示用にまとめたデータ構造だよ。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GameStateData {
    pub status: GameStatus,
    /// 全部のカードの状態リスト (手に持ってるカードは含まない)。
    pub cards: Vec<CardData>,
    pub stock_count: usize,
    /// 捨て札で扇状に見せるカード。
    pub waste_fan: Vec<CardId>,
    pub undo_available: bool,
    pub selection: Option<Run>,
}

/// カード1枚の状態を表すデータ構造。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CardData {
    pub id: CardId,
    pub suit: Suit,
    pub rank: Rank,
    pub is_face_up: bool,
    /// このカードが現在どの山に属しているか。
    pub pile: PileId,
    /// その山の中で何番目に積まれているか (0が一番下)。
    pub position_in_pile: usize,
}
