// src/logic/mod.rs
//! ゲームのルールや判断ロジック (World を書き換えない純粋な部分) をまとめるよ。

pub mod auto_move;
pub mod deck;
pub mod rules;
