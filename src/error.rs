// src/error.rs
//! エンジンの操作が失敗した時に返すエラーの種類だよ。

use std::fmt;

use crate::components::card::CardId;
use crate::components::stack::PileId;

/// エンジン操作のエラー。
///
/// どのエラーも「操作は何も変更しなかった」ことを意味する。
/// 途中まで反映された状態が残ることはないよ。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// 移動先がその run を受け付けなかった。
    IllegalMove { target: PileId },
    /// 空の山、または持ち上げられないカードを選ぼうとした。
    EmptySource { pile: PileId, card: Option<CardId> },
    /// Undo 記録とテーブルの状態が食い違ってる。エンジンのバグ。
    MalformedUndo(String),
    /// すでに選択中の run がある。
    SelectionActive,
    /// 置こうとしたけど選択中の run がない。
    NoSelection,
    /// ゲームはもう終わってる (勝利済み)。
    GameOver,
    /// 存在しない山の ID。
    UnknownPile(PileId),
    /// セーブデータや設定値が不正。
    InvalidState(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::IllegalMove { target } => write!(f, "illegal move onto {}", target),
            EngineError::EmptySource { pile, card: Some(card) } => {
                write!(f, "card {:?} cannot be lifted from {}", card, pile)
            }
            EngineError::EmptySource { pile, card: None } => write!(f, "nothing to lift from {}", pile),
            EngineError::MalformedUndo(reason) => write!(f, "malformed undo record: {}", reason),
            EngineError::SelectionActive => write!(f, "a run is already selected"),
            EngineError::NoSelection => write!(f, "no run is selected"),
            EngineError::GameOver => write!(f, "the game is already won"),
            EngineError::UnknownPile(pile) => write!(f, "unknown pile {}", pile),
            EngineError::InvalidState(reason) => write!(f, "invalid state: {}", reason),
        }
    }
}

impl std::error::Error for EngineError {}
