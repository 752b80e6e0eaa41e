//! 組札 (Foundation) へのカード移動ルールを定義するよ。

use log::debug;

use super::common::is_one_rank_above;
use crate::components::card::{Card, Rank};

/// 指定されたカードが、一番上が `target_top` の組札に置けるかチェックする。
///
/// - 空の組札には A だけ置ける (スートは何でもOK)。
/// - そうでなければ、同じスートでランクがちょうど1つ上のカードだけ。
pub fn can_move_to_foundation(target_top: Option<&Card>, card_to_move: &Card) -> bool {
    let result = match target_top {
        None => card_to_move.rank == Rank::Ace,
        Some(top) => card_to_move.suit == top.suit && is_one_rank_above(card_to_move, top),
    };
    debug!(
        "[Foundation Rule] {} onto {}: {}",
        card_to_move,
        target_top.map_or_else(|| "empty foundation".to_string(), |c| c.to_string()),
        result
    );
    result
}
