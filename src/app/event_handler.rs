// src/app/event_handler.rs
//! ポインタの座標から、どのスタックやカードに当たったかを判定するロジック。
//! ここの関数はどれも GameState を読むだけで変更しないよ。

use log::debug;

use crate::app::layout_calculator;
use crate::components::card::Card;
use crate::components::stack::StackType;
use crate::game_state::GameState;

/// クリックされた要素の種類を表す Enum だよ！
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// 山札がクリックされた。
    Stock,
    /// 持ち上げられるカード (場札か捨て札の一番上) がクリックされた。
    Card { stack: StackType, index: usize },
}

/// 座標が山札の範囲内か。
pub fn is_stock_clicked(x: f32, y: f32) -> bool {
    layout_calculator::stock_rect().contains(x, y)
}

/// 座標にある「持ち上げられるカード」を探す。
///
/// 場札を番号順にチェックして、最後に捨て札。最初に当たったものを返すよ。
/// 対象は各スタックの一番上のカードだけで、空のスタックには当たらない。
pub fn find_selectable_card(game: &GameState, x: f32, y: f32) -> Option<ClickTarget> {
    let candidates = game
        .tableau_piles()
        .iter()
        .chain(std::iter::once(game.waste_pile()));

    for pile in candidates {
        if let Some(rect) = pile.top_card_rect() {
            if rect.contains(x, y) {
                let index = pile.len() - 1;
                debug!("Hit top card of {} (index {}) at ({}, {})", pile.stack_type(), index, x, y);
                return Some(ClickTarget::Card { stack: pile.stack_type(), index });
            }
        }
    }
    None
}

/// クリックされた座標に基づいて、山札か持ち上げられるカードを特定する。
/// 山札が優先。どちらにも当たらなければ None。
pub fn find_clicked_element(game: &GameState, x: f32, y: f32) -> Option<ClickTarget> {
    if is_stock_clicked(x, y) {
        return Some(ClickTarget::Stock);
    }
    find_selectable_card(game, x, y)
}

/// `card` を座標 (x, y) で離した時の移動先を探す。
///
/// 場札 (番号順) → 組札 (番号順) の順にチェックして、
/// 範囲内かつ `can_accept` が true の最初のスタックを返す。移動元自身は除外するよ。
pub fn find_drop_target(game: &GameState, card: &Card, source: StackType, x: f32, y: f32) -> Option<StackType> {
    let target = game
        .tableau_piles()
        .iter()
        .chain(game.foundation_piles().iter())
        .filter(|pile| pile.stack_type() != source)
        .find(|pile| pile.hit_rect().contains(x, y) && pile.can_accept(card))
        .map(|pile| pile.stack_type());
    debug!("Drop target for {} at ({}, {}): {:?}", card, x, y, target);
    target
}
