// src/lib.rs

// WASM と JavaScript を繋ぐための基本！
use wasm_bindgen::prelude::*;

// 自分で作ったモジュールたち！ これでコードを整理してるんだ。
pub mod app; // JS 向けの窓口 (GameApp) とロガー
pub mod components;
pub mod config;
pub mod error;
pub mod game;
pub mod logic;
pub mod protocol; // 呼び出し側とやり取りするデータの形
pub mod systems;
pub mod world;

// よく使う型はクレートのトップから使えるようにしておくよ。
pub use app::GameApp;
pub use components::card::{Card, CardId, Rank, Suit};
pub use components::stack::PileId;
pub use config::GameConfig;
pub use error::EngineError;
pub use game::Game;
pub use protocol::{GameEvent, GameStateData, PlacementResult, Run, SavedGame};

// main 関数の代わりに、Wasm がロードされた時に最初に実行される関数だよ。
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    app::logger::init_console_logger();
    log::info!("Panic hook and logger set!");
}
