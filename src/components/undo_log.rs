// src/components/undo_log.rs

use serde::{Deserialize, Serialize};

use crate::components::card::CardId;
use crate::components::stack::PileId;

/// Undo 記録の種類。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// 普通のカード移動 (場札、組札、捨て札の間)。
    MoveCard,
    /// 山札をタップして捨て札にめくった。
    TapStock,
    /// 空の山札をタップして捨て札を全部戻した。
    ResetWastePile,
}

/// 1回分の操作の記録。これを逆再生すると操作前に戻るよ。↩️
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UndoRecord {
    pub kind: MoveKind,
    /// 動いたカード。下から上の順。
    pub cards: Vec<CardId>,
    pub from: PileId,
    /// 移動元で run の一番下がいた位置。
    pub from_index: Option<usize>,
    pub to: PileId,
    /// 移動先で run の一番下が置かれた位置。
    pub to_index: Option<usize>,
    /// 移動のあとで移動元の場札がめくれたか。
    pub revealed_source: bool,
}

/// Undo 記録のスタック。新しいものが最後。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UndoLog {
    records: Vec<UndoRecord>,
}

impl UndoLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: UndoRecord) {
        self.records.push(record);
    }

    pub fn pop(&mut self) -> Option<UndoRecord> {
        self.records.pop()
    }

    pub fn last(&self) -> Option<&UndoRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn records(&self) -> &[UndoRecord] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(kind: MoveKind) -> UndoRecord {
        UndoRecord {
            kind,
            cards: vec![CardId(0)],
            from: PileId::Waste,
            from_index: Some(0),
            to: PileId::Tableau(0),
            to_index: Some(0),
            revealed_source: false,
        }
    }

    #[test]
    fn records_are_popped_newest_first() {
        let mut log = UndoLog::new();
        log.push(record(MoveKind::TapStock));
        log.push(record(MoveKind::MoveCard));
        assert_eq!(log.len(), 2);
        assert_eq!(log.last().map(|r| r.kind), Some(MoveKind::MoveCard));
        assert_eq!(log.pop().map(|r| r.kind), Some(MoveKind::MoveCard));
        assert_eq!(log.pop().map(|r| r.kind), Some(MoveKind::TapStock));
        assert!(log.pop().is_none());
    }

    #[test]
    fn clear_empties_the_log() {
        let mut log = UndoLog::new();
        log.push(record(MoveKind::ResetWastePile));
        log.clear();
        assert!(log.is_empty());
    }
}
