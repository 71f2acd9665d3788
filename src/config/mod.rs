// src/config/mod.rs
//! ゲームの設定値をまとめるモジュールだよ！

pub mod rules;

pub use rules::GameConfig;
