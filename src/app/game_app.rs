// src/app/game_app.rs

// --- 必要なものをインポート ---
use log::{error, info};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::app::state_getter;
use crate::components::card::CardId;
use crate::components::stack::PileId;
use crate::config::GameConfig;
use crate::error::EngineError;
use crate::game::Game;

// --- JavaScript から使うゲーム全体の窓口 ---
//
// JS とは JSON 文字列でやり取りするよ。
// 山の指定は `"Waste"` とか `{"Tableau":3}` みたいな JSON、カードは 0-51 の ID。
// エラーは文字列にして JS 側に返す。
#[wasm_bindgen]
pub struct GameApp {
    game: Game,
}

#[wasm_bindgen]
impl GameApp {
    /// 新しいゲームを作る。`config_json` を省略したらデフォルト (3枚めくり)。
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<GameApp, String> {
        info!("GameApp: 初期化中...");
        let config = match config_json {
            Some(json) => GameConfig::from_json(&json).map_err(report)?,
            None => GameConfig::default(),
        };
        let game = Game::new(config).map_err(report)?;
        info!("GameApp: 初期化完了。");
        Ok(Self { game })
    }

    pub fn new_game(&mut self, reshuffle: bool) -> Result<(), String> {
        self.game.new_game(reshuffle).map_err(report)
    }

    pub fn new_game_seeded(&mut self, seed: u64) -> Result<(), String> {
        self.game.new_game_seeded(seed).map_err(report)
    }

    /// run を持ち上げる。持ち上げた run を JSON で返すよ。
    pub fn select_run(&mut self, pile_json: &str, card_id: u8) -> Result<String, String> {
        let pile = parse_pile(pile_json)?;
        let run = self.game.select_run(pile, CardId(card_id)).map_err(report)?;
        to_json(&run)
    }

    pub fn attempt_place(&mut self, pile_json: &str) -> Result<String, String> {
        let target = parse_pile(pile_json)?;
        let result = self.game.attempt_place(target).map_err(report)?;
        to_json(&result)
    }

    pub fn auto_place(&mut self) -> Result<String, String> {
        let result = self.game.auto_place().map_err(report)?;
        to_json(&result)
    }

    pub fn cancel_selection(&mut self) -> Result<bool, String> {
        self.game.cancel_selection().map_err(report)
    }

    pub fn undo(&mut self) -> Result<bool, String> {
        self.game.undo().map_err(report)
    }

    /// 山札をタップ。めくったカードを JSON で返す。
    pub fn tap_stock(&mut self) -> Result<String, String> {
        let dealt = self.game.tap_stock().map_err(report)?;
        to_json(&dealt)
    }

    pub fn tap_waste(&mut self) -> Result<(), String> {
        self.game.tap_waste().map_err(report)
    }

    /// ダブルクリックで組札へ。
    pub fn send_to_foundation(&mut self, card_id: u8) -> Result<String, String> {
        let result = self.game.send_to_foundation(CardId(card_id)).map_err(report)?;
        to_json(&result)
    }

    pub fn auto_finish(&mut self) -> Result<usize, String> {
        self.game.auto_finish().map_err(report)
    }

    pub fn can_undo(&self) -> bool {
        self.game.can_undo()
    }

    pub fn can_auto_finish(&self) -> bool {
        self.game.can_auto_finish()
    }

    pub fn is_won(&self) -> bool {
        self.game.is_won()
    }

    /// 描画用の状態を JSON で返す。
    pub fn get_game_state_json(&self) -> Result<String, String> {
        state_getter::get_game_state_json(&self.game)
    }

    /// 溜まったイベントを JSON 配列で取り出す。
    pub fn drain_events_json(&mut self) -> Result<String, String> {
        let events = self.game.drain_events();
        to_json(&events)
    }

    /// セーブデータを JSON で書き出す。
    pub fn save_json(&self) -> Result<String, String> {
        self.game.to_json().map_err(report)
    }

    /// セーブデータを読み込む。失敗したら今のゲームはそのまま。
    pub fn load_json(&mut self, json: &str) -> Result<(), String> {
        self.game = Game::from_json(json).map_err(report)?;
        info!("GameApp: セーブデータを読み込みました。");
        Ok(())
    }
}

// --- JS とのやり取り用ヘルパー ---

fn report(e: EngineError) -> String {
    let message = e.to_string();
    error!("GameApp: {}", message);
    message
}

fn parse_pile(json: &str) -> Result<PileId, String> {
    serde_json::from_str(json).map_err(|e| {
        let message = format!("Invalid pile {}: {}", json, e);
        error!("GameApp: {}", message);
        message
    })
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| {
        let message = format!("Failed to serialize response: {}", e);
        error!("GameApp: {}", message);
        message
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{GameEvent, GameStateData, PlacementResult, Run};
    #[cfg(target_arch = "wasm32")]
    use wasm_bindgen_test::*;

    fn app() -> GameApp {
        let mut app = GameApp::new(Some(r#"{"draw_count":1}"#.to_string())).unwrap();
        app.new_game_seeded(17).unwrap();
        app
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    fn constructor_rejects_bad_config() {
        assert!(GameApp::new(Some(r#"{"draw_count":7}"#.to_string())).is_err());
        assert!(GameApp::new(Some("nope".to_string())).is_err());
        assert!(GameApp::new(None).is_ok());
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    fn select_and_cancel_through_json() {
        let mut app = app();
        let state: GameStateData = serde_json::from_str(&app.get_game_state_json().unwrap()).unwrap();
        let top = state
            .cards
            .iter()
            .find(|c| c.pile == PileId::Tableau(0))
            .map(|c| c.id)
            .unwrap();

        let run: Run = serde_json::from_str(&app.select_run(r#"{"Tableau":0}"#, top.0).unwrap()).unwrap();
        assert_eq!(run.source, PileId::Tableau(0));
        assert_eq!(app.cancel_selection(), Ok(true));

        assert!(app.select_run("not a pile", top.0).is_err());
        assert!(app.attempt_place(r#""Waste""#).is_err(), "何も持ってない");
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    fn tap_stock_undo_and_events() {
        let mut app = app();
        let dealt: Vec<crate::components::card::Card> = serde_json::from_str(&app.tap_stock().unwrap()).unwrap();
        assert_eq!(dealt.len(), 1);
        assert!(app.can_undo());

        let events: Vec<GameEvent> = serde_json::from_str(&app.drain_events_json().unwrap()).unwrap();
        assert_eq!(events.len(), 1);

        assert_eq!(app.undo(), Ok(true));
        assert!(!app.can_undo());
        assert_eq!(app.tap_waste(), Err("illegal move onto Stock".to_string()));
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    fn save_and_load_round_trip() {
        let mut app = app();
        app.tap_stock().unwrap();
        let saved = app.save_json().unwrap();

        let mut other = GameApp::new(None).unwrap();
        other.load_json(&saved).unwrap();
        assert_eq!(other.get_game_state_json(), app.get_game_state_json());
        assert!(other.load_json("{}").is_err());
        assert_eq!(other.get_game_state_json(), app.get_game_state_json(), "失敗したら何も変わらない");
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    fn send_to_foundation_reports_failure_as_json() {
        let mut app = app();
        // 山札のカードは直接組札に送れない
        let state: GameStateData = serde_json::from_str(&app.get_game_state_json().unwrap()).unwrap();
        let in_stock = state.cards.iter().find(|c| c.pile == PileId::Stock).map(|c| c.id).unwrap();
        let result: PlacementResult = serde_json::from_str(&app.send_to_foundation(in_stock.0).unwrap()).unwrap();
        assert!(!result.success);
    }
}
