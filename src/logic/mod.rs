// src/logic/mod.rs
//! ゲームのルールとデッキ操作。描画や入力には依存しないよ。

pub mod auto_move;
pub mod deck;
pub mod rules;
