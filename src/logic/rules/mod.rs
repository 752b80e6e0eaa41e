// src/logic/rules/mod.rs
//! ソリティアのルール関連モジュールをまとめるよ！
//! どの関数も状態を変更しない純粋な判定だけ。

pub mod common;
pub mod foundation;
pub mod move_validation;
pub mod stock_waste;
pub mod tableau;
pub mod win_condition;

#[cfg(test)]
mod tests;

pub use common::*;
pub use foundation::*;
pub use move_validation::*;
pub use stock_waste::*;
pub use tableau::*;
pub use win_condition::*;
