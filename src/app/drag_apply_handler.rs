// src/app/drag_apply_handler.rs
//! Applies a move that already passed the rule check.

use log::{error, info};

use crate::components::card::Card;
use crate::components::stack::StackType;
use crate::game_state::GameState;

/// `card` を `from` から `to` へ動かして、状態が壊れていないか確認する。
///
/// ルールのチェック (`can_accept`) は呼び出し側で済ませておくこと。
/// 移動元が場札なら、新しく一番上になったカードが表向きになるよ。
/// デバッグビルドでは移動後に [`GameState::validate`] を実行し、違反があれば panic する。
pub fn apply_move(game: &mut GameState, card: &Card, from: StackType, to: StackType) {
    debug_assert!(to.is_drop_target(), "{} cannot receive cards", to);
    game.move_card(card, from, to);
    info!("Moved {} from {} to {}.", card, from, to);

    if cfg!(debug_assertions) {
        if let Err(reason) = game.validate() {
            error!("Game state is broken after moving {}: {}", card, reason);
            panic!("invalid game state after move: {}", reason);
        }
    }

    if game.is_won() {
        info!("🎉 All cards are on the foundations!");
    }
}
