// src/app/mod.rs
//! JavaScript 側に見せる GameApp と、その周りの小物を置くモジュールだよ！

pub mod game_app;
pub mod logger;
pub mod state_getter;

pub use game_app::GameApp;
