// src/components/stack.rs

// serde を使うためにインポート！PileId は JS 側から JSON で届くこともあるからね。
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::rules::{FOUNDATION_COUNT, TABLEAU_COUNT};

/// カードが存在する場所の種類を示す Enum だよ。
/// 山札なのか、場札の何列目なのか、組札の何番目なのかを区別する。
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PileId {
    /// 山札 (Stock)。裏向きのカードが積まれてる場所。
    Stock,
    /// 山札からめくったカードを置く場所 (Waste)。
    Waste,
    /// 組札 (Foundation)。4つあるので番号 (0-3) を持つ。
    /// 最初に置かれたエースでスートが決まるから、番号とスートは固定じゃないよ。
    Foundation(u8),
    /// 場札 (Tableau)。7つの列があるので列番号 (0-6) を持つ。
    Tableau(u8),
}

impl PileId {
    /// 番号が範囲内かチェックする。`Foundation(9)` みたいな ID は無効！
    pub fn is_valid(self) -> bool {
        match self {
            PileId::Stock | PileId::Waste => true,
            PileId::Foundation(index) => usize::from(index) < FOUNDATION_COUNT,
            PileId::Tableau(index) => usize::from(index) < TABLEAU_COUNT,
        }
    }

    /// テーブル上の全ての山を決まった順番で返す。
    pub fn all() -> impl Iterator<Item = PileId> {
        [PileId::Stock, PileId::Waste]
            .into_iter()
            .chain((0..FOUNDATION_COUNT as u8).map(PileId::Foundation))
            .chain((0..TABLEAU_COUNT as u8).map(PileId::Tableau))
    }
}

impl fmt::Display for PileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PileId::Stock => write!(f, "Stock"),
            PileId::Waste => write!(f, "Waste"),
            PileId::Foundation(index) => write!(f, "Foundation({})", index),
            PileId::Tableau(index) => write!(f, "Tableau({})", index),
        }
    }
}

/// カードが今どこにいるかを表す情報だよ。
/// `World` がカード ID ごとにこれを持っていて、「このカードはどの山の何番目？」に答える。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// カードが属している山。
    pub pile: PileId,
    /// その山の中で下から何番目か (0 が一番下)。
    /// 山札 (Stock) の場合は 0 が一番最後にめくられるカード。
    pub index: usize,
}

impl Location {
    pub fn new(pile: PileId, index: usize) -> Self {
        Self { pile, index }
    }
}
