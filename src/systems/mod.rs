// src/systems/mod.rs
//! テーブルの状態を変える処理 (システム) をまとめるよ！

pub mod deal_system;
pub mod move_card_system;
pub mod stock_system;
pub mod undo_system;
pub mod win_condition_system;

pub use deal_system::DealInitialCardsSystem;
pub use move_card_system::{MoveCardSystem, Placement, Selection};
pub use stock_system::StockSystem;
pub use undo_system::UndoSystem;
pub use win_condition_system::WinConditionSystem;
