// src/components/game_state.rs

// serde を使う宣言！ゲーム状態をセーブデータに入れたり JS に渡したりするよ！
use serde::{Deserialize, Serialize};

/// ゲーム全体の現在の状態を表す列挙型だよ！🏆🏁
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// ゲームが進行中の状態
    #[default]
    Playing,
    /// 52枚全部が組札に乗った！勝利！🏆
    Won,
}

/// エンジンの今の段階。run を持ち上げてる途中かどうか。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnginePhase {
    /// 何も選んでない。
    #[default]
    Idle,
    /// run を持ち上げてて、置き場所を待ってる。
    SelectionActive,
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_playing_and_idle() {
        assert_eq!(GameStatus::default(), GameStatus::Playing);
        assert_eq!(EnginePhase::default(), EnginePhase::Idle);
        assert_ne!(GameStatus::Playing, GameStatus::Won);
        println!("GameStatus のデフォルトテスト、成功！🎉");
    }

    #[test]
    fn status_serializes_as_plain_string() {
        assert_eq!(serde_json::to_string(&GameStatus::Won).unwrap(), r#""Won""#);
    }
}
