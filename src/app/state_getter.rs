// src/app/state_getter.rs
//! Builds the render snapshot from the game state and converts it to JSON.

use log::{debug, error};

use crate::app::layout_calculator;
use crate::components::dragging_info::DraggingInfo;
use crate::components::pile::Pile;
use crate::components::stack::StackType;
use crate::game_state::GameState;
use crate::protocol::{CardData, DraggedCardData, GameStateData, PileData, StockData};

pub const START_LABEL: &str = "Start";
pub const RESTART_LABEL: &str = "Restart";

/// スタック1つ分のスナップショット。見えているカードだけ入れるよ。
fn pile_data(pile: &Pile, selection: Option<&DraggingInfo>) -> PileData {
    let positions = pile.card_positions();
    let first_visible = pile.first_visible_index();
    let cards = pile
        .cards()
        .iter()
        .zip(positions)
        .enumerate()
        .skip(first_visible)
        .map(|(index, (card, position))| CardData {
            suit: card.suit,
            rank: card.rank,
            is_face_up: card.is_face_up,
            position,
            is_selected: selection
                .is_some_and(|s| s.source == pile.stack_type() && s.original_position_in_stack == index),
        })
        .collect();

    PileData {
        stack_type: pile.stack_type(),
        anchor: pile.anchor(),
        card_count: pile.len(),
        cards,
    }
}

/// ゲームの状態から描画用のスナップショットを作る。
pub fn build_game_state_data(game: &GameState, selection: Option<&DraggingInfo>) -> GameStateData {
    let piles = game.all_piles().map(|pile| pile_data(pile, selection)).collect();
    let dragged = selection.map(|info| DraggedCardData {
        source: info.source,
        suit: info.card.suit,
        rank: info.card.rank,
        drag_position: info.drag_position,
    });
    let label = if game.is_dealt() { RESTART_LABEL } else { START_LABEL };

    GameStateData {
        status: game.status(),
        dealt: game.is_dealt(),
        start_button_label: label.to_string(),
        stock: StockData {
            remaining: game.deck().len(),
            anchor: layout_calculator::pile_anchor(StackType::Stock),
        },
        piles,
        dragged,
    }
}

/// ゲームの状態を取得し、JSON 文字列として返します。
pub fn get_game_state_json(game: &GameState, selection: Option<&DraggingInfo>) -> Result<String, String> {
    let data = build_game_state_data(game, selection);
    match serde_json::to_string(&data) {
        Ok(json_string) => {
            debug!("Serialized game state ({} bytes).", json_string.len());
            Ok(json_string)
        }
        Err(e) => {
            let error_msg = format!("Failed to serialize game state: {}", e);
            error!("{}", error_msg);
            Err(error_msg)
        }
    }
}
