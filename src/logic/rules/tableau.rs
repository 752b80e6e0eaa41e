//! 場札 (Tableau) へのカード移動ルールを定義するよ。

use log::debug;

use super::common::{colors_differ, is_one_rank_below};
use crate::components::card::{Card, Rank};

/// 指定されたカードが、一番上が `target_top` の場札に置けるかチェックする。
///
/// - 空の場札 (`None`) には K だけ置ける。
/// - そうでなければ、色が違っていて、ランクがちょうど1つ下のカードだけ。
pub fn can_move_to_tableau(target_top: Option<&Card>, card_to_move: &Card) -> bool {
    match target_top {
        Some(top) => {
            let colors_different = colors_differ(card_to_move, top);
            let rank_is_one_less = is_one_rank_below(card_to_move, top);
            debug!(
                "[Tableau Rule] {} onto {}: colors different = {}, rank one less = {}",
                card_to_move, top, colors_different, rank_is_one_less
            );
            colors_different && rank_is_one_less
        }
        None => {
            let is_king = card_to_move.rank == Rank::King;
            debug!("[Tableau Rule] {} onto empty tableau: is king = {}", card_to_move, is_king);
            is_king
        }
    }
}
