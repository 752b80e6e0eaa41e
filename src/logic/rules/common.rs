//! ルール判定で共通して使うヘルパー関数を置くよ。

use crate::components::card::{Card, CardColor};

/// 2枚のカードの色が違うか。
pub fn colors_differ(a: &Card, b: &Card) -> bool {
    let a_color: CardColor = a.color();
    a_color != b.color()
}

/// `card` のランクが `other` のちょうど1つ下か (K の下は Q、A の下は無し)。
pub fn is_one_rank_below(card: &Card, other: &Card) -> bool {
    card.rank.value() + 1 == other.rank.value()
}

/// `card` のランクが `other` のちょうど1つ上か。
pub fn is_one_rank_above(card: &Card, other: &Card) -> bool {
    is_one_rank_below(other, card)
}
