// src/app/layout_calculator.rs
//! Calculates pile anchors and the drawing position of cards in each pile.

use crate::components::position::{Position, Rect};
use crate::components::stack::StackType;
use crate::config::layout::{
    CARD_HEIGHT, CARD_WIDTH, FOUNDATION_START_X, FOUNDATION_START_Y, FOUNDATION_X_OFFSET,
    STOCK_POS_X, STOCK_POS_Y, TABLEAU_CARD_SPACING_Y, TABLEAU_START_X, TABLEAU_START_Y,
    TABLEAU_X_OFFSET, WASTE_CARD_SPACING_X, WASTE_POS_X, WASTE_POS_Y, WASTE_VISIBLE_CARDS,
};

/// スタックの基準位置 (アンカー) を計算するよ。
pub fn pile_anchor(stack_type: StackType) -> Position {
    match stack_type {
        StackType::Stock => Position::new(STOCK_POS_X, STOCK_POS_Y),
        StackType::Waste => Position::new(WASTE_POS_X, WASTE_POS_Y),
        StackType::Foundation(index) => {
            Position::new(FOUNDATION_START_X + FOUNDATION_X_OFFSET * index as f32, FOUNDATION_START_Y)
        }
        StackType::Tableau(index) => {
            Position::new(TABLEAU_START_X + TABLEAU_X_OFFSET * index as f32, TABLEAU_START_Y)
        }
    }
}

/// 描画される最初のカードのインデックス。
/// 組札は一番上の1枚だけ、捨て札は最新の3枚、場札と山札はその他全部 (山札は重なってる)。
pub fn first_visible_index(stack_type: StackType, len: usize) -> usize {
    match stack_type {
        StackType::Foundation(_) => len.saturating_sub(1),
        StackType::Waste => len.saturating_sub(WASTE_VISIBLE_CARDS),
        StackType::Tableau(_) | StackType::Stock => 0,
    }
}

/// スタック内で `index` 番目 (0 が一番下) のカードの描画位置。
///
/// # 引数
/// * `anchor`: スタックの基準位置。
/// * `index`: スタック内でのカードの順序。
/// * `len`: スタックの枚数 (捨て札でどの3枚を広げるか決めるのに使う)。
pub fn card_position(stack_type: StackType, anchor: Position, index: usize, len: usize) -> Position {
    match stack_type {
        StackType::Tableau(_) => Position::new(anchor.x, anchor.y + TABLEAU_CARD_SPACING_Y * index as f32),
        StackType::Waste => {
            // 古いカードは広げた3枚の一番左の下に隠れる
            let slot = index.saturating_sub(first_visible_index(stack_type, len));
            Position::new(anchor.x + WASTE_CARD_SPACING_X * slot as f32, anchor.y)
        }
        StackType::Foundation(_) | StackType::Stock => anchor,
    }
}

/// スタックの全カードの描画位置。
pub fn card_positions(stack_type: StackType, anchor: Position, len: usize) -> Vec<Position> {
    (0..len).map(|i| card_position(stack_type, anchor, i, len)).collect()
}

/// 描画位置からカード1枚分の矩形を作る。
pub fn card_rect(position: Position) -> Rect {
    Rect::at(position, CARD_WIDTH, CARD_HEIGHT)
}

/// 山札をクリックできる範囲。
pub fn stock_rect() -> Rect {
    card_rect(pile_anchor(StackType::Stock))
}
