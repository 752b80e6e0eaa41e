// src/app/drag_handler.rs
//! Handles card dragging logic (start, update, end).

use log::{debug, error, info};

use crate::app::drag_apply_handler;
use crate::app::event_handler::{self, ClickTarget};
use crate::app::layout_calculator;
use crate::components::dragging_info::DraggingInfo;
use crate::components::position::Position;
use crate::components::stack::StackType;
use crate::config::layout::{CARD_HEIGHT, CARD_WIDTH};
use crate::game_state::GameState;

/// ドラッグの終わり方。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropResult {
    /// 受け入れてくれるスタックに移動した。
    Moved { from: StackType, to: StackType },
    /// どこにも置けなかったので元のまま。
    Rejected { from: StackType },
}

/// ドラッグ開始。座標にある持ち上げられるカードを選択して `DraggingInfo` を返す。
/// 何も当たらなければ None。
pub fn handle_drag_start(game: &GameState, x: f32, y: f32) -> Option<DraggingInfo> {
    let Some(ClickTarget::Card { stack, index }) = event_handler::find_selectable_card(game, x, y) else {
        return None;
    };
    debug_assert!(stack.is_selectable_source(), "{} is not a selectable source", stack);
    let Some(pile) = game.pile(stack) else {
        error!("handle_drag_start: no pile for {}", stack);
        return None;
    };
    let card = pile.cards().get(index)?.clone();
    let position = layout_calculator::card_position(stack, pile.anchor(), index, pile.len());

    info!("Selected {} from {} (index {}).", card, stack, index);
    Some(DraggingInfo::new(stack, card, index, position))
}

/// ドラッグ中の位置更新。カードの中心がポインタに来るようにする (見た目だけ)。
pub fn update_dragged_position(info: &mut DraggingInfo, x: f32, y: f32) {
    info.drag_position = Position::new(x - CARD_WIDTH / 2.0, y - CARD_HEIGHT / 2.0);
}

/// ドラッグ終了。離した座標に受け入れ可能なスタックがあればカードを移動する。
pub fn handle_drag_end(game: &mut GameState, info: &DraggingInfo, x: f32, y: f32) -> DropResult {
    match event_handler::find_drop_target(game, &info.card, info.source, x, y) {
        Some(target) => {
            drag_apply_handler::apply_move(game, &info.card, info.source, target);
            DropResult::Moved { from: info.source, to: target }
        }
        None => {
            debug!("Drop of {} at ({}, {}) rejected; nothing changes.", info.card, x, y);
            DropResult::Rejected { from: info.source }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dealt_game() -> GameState {
        let mut game = GameState::with_seed(41);
        game.request_start();
        game.tick();
        game
    }

    #[test]
    fn drag_start_on_empty_area_selects_nothing() {
        let game = dealt_game();
        assert!(handle_drag_start(&game, 5.0, 5.0).is_none());
    }

    #[test]
    fn drag_start_remembers_source_and_position() {
        let game = dealt_game();
        let anchor = game.tableau_piles()[0].anchor();
        let info = handle_drag_start(&game, anchor.x + 10.0, anchor.y + 10.0).expect("tableau 0 top card");
        assert_eq!(info.source, StackType::Tableau(0));
        assert_eq!(info.original_position_in_stack, 0);
        assert_eq!(info.original_position, anchor);
        assert_eq!(info.drag_position, anchor);
        assert_eq!(Some(&info.card), game.tableau_piles()[0].top_card());
    }

    #[test]
    fn drag_position_centers_card_on_pointer() {
        let game = dealt_game();
        let anchor = game.tableau_piles()[0].anchor();
        let mut info = handle_drag_start(&game, anchor.x + 1.0, anchor.y + 1.0).expect("selected");
        update_dragged_position(&mut info, 640.0, 360.0);
        assert_eq!(info.drag_position, Position::new(640.0 - CARD_WIDTH / 2.0, 360.0 - CARD_HEIGHT / 2.0));
        assert_eq!(info.original_position, anchor);
    }

    #[test]
    fn rejected_drop_changes_nothing() {
        let mut game = dealt_game();
        let anchor = game.tableau_piles()[0].anchor();
        let info = handle_drag_start(&game, anchor.x + 1.0, anchor.y + 1.0).expect("selected");
        let before: Vec<_> = game.all_piles().cloned().collect();

        let result = handle_drag_end(&mut game, &info, 5.0, 710.0);
        assert_eq!(result, DropResult::Rejected { from: StackType::Tableau(0) });
        let after: Vec<_> = game.all_piles().cloned().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn drop_back_on_source_is_noop() {
        let mut game = dealt_game();
        let anchor = game.tableau_piles()[0].anchor();
        let info = handle_drag_start(&game, anchor.x + 1.0, anchor.y + 1.0).expect("selected");
        let result = handle_drag_end(&mut game, &info, anchor.x + 1.0, anchor.y + 1.0);
        assert_eq!(result, DropResult::Rejected { from: StackType::Tableau(0) });
        assert_eq!(game.tableau_piles()[0].len(), 1);
    }
}
