// src/config/rules.rs
//! テーブルの大きさやルールに関する定数を定義するよ！
//! デッキの枚数、組札や場札の数、山札から一度にめくる枚数など。

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

pub const DECK_SIZE: usize = 52; // 標準デッキの枚数
pub const RANKS_PER_SUIT: usize = 13; // A から K まで
pub const FOUNDATION_COUNT: usize = 4; // 組札の数 (スートの数)
pub const TABLEAU_COUNT: usize = 7; // 場札の列数
pub const DEFAULT_DRAW_COUNT: usize = 3; // 山札から一度にめくる枚数
pub const MAX_DRAW_COUNT: usize = 3;

/// 1ゲーム分の設定。JSON から読み込めるようにしておくよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// 山札をタップした時に Waste に配る枚数 (1-3)。
    pub draw_count: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { draw_count: DEFAULT_DRAW_COUNT }
    }
}

impl GameConfig {
    /// 設定値が範囲内かチェックする。
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.draw_count == 0 || self.draw_count > MAX_DRAW_COUNT {
            return Err(EngineError::InvalidState(format!(
                "draw_count must be between 1 and {}, got {}",
                MAX_DRAW_COUNT, self.draw_count
            )));
        }
        Ok(())
    }

    /// JSON 文字列から設定を読み込む。足りない項目はデフォルト値になる。
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let config: GameConfig = serde_json::from_str(json)
            .map_err(|e| EngineError::InvalidState(format!("bad config JSON: {}", e)))?;
        config.validate()?;
        Ok(config)
    }
}
