// src/components/mod.rs

// この components モジュールに属するサブモジュールを宣言するよ！
pub mod card;
pub mod deck;
pub mod foundation;
pub mod game_state;
pub mod pile;
pub mod stack;
pub mod stock;
pub mod tableau;
pub mod undo_log;
pub mod waste;
