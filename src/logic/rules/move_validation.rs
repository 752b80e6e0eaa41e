// src/logic/rules/move_validation.rs
//! 移動先スタックの種類に応じてルール関数を振り分ける。

use log::debug;

use super::{foundation, tableau};
use crate::components::card::Card;
use crate::components::stack::StackType;

/// `card` を一番上が `target_top` の `target_stack` に置けるか。
/// 捨て札と山札はプレイヤーの移動先にはならないので常に false。
pub fn is_move_valid(target_stack: StackType, target_top: Option<&Card>, card: &Card) -> bool {
    match target_stack {
        StackType::Tableau(_) => tableau::can_move_to_tableau(target_top, card),
        StackType::Foundation(_) => foundation::can_move_to_foundation(target_top, card),
        StackType::Waste | StackType::Stock => {
            debug!("[Rules Validation] Moving to {} is not allowed.", target_stack);
            false
        }
    }
}
