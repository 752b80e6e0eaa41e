// src/components/dragging_info.rs

use serde::{Deserialize, Serialize};

use crate::components::card::Card;
use crate::components::position::Position;
use crate::components::stack::StackType;

/// 選択中 (ドラッグ中) のカードの情報だよ！🖱️➡️🃏
///
/// 選択しただけではカードは元のスタックに残ったまま。
/// 離した時にルールOKなら初めて移動する。
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DraggingInfo {
    /// どのスタックから持ち上げたか (場札か捨て札)。
    pub source: StackType,
    /// 持ち上げたカード。
    pub card: Card,
    /// 持ち上げた時のスタック内の順番 (常に一番上)。
    pub original_position_in_stack: usize,
    /// 持ち上げた時のカードの描画位置。
    pub original_position: Position,
    /// 今カードを描く位置。ポインタの移動で更新される、見た目だけの値。
    pub drag_position: Position,
}

impl DraggingInfo {
    pub fn new(source: StackType, card: Card, index: usize, position: Position) -> Self {
        Self {
            source,
            card,
            original_position_in_stack: index,
            original_position: position,
            drag_position: position,
        }
    }
}
