//! 山札 (Stock) と捨て札 (Waste) に関するルールを定義するよ。

/// 一度にめくる枚数。
pub const DRAW_COUNT: usize = 3;

/// 山札から捨て札にカードを配れるかチェックする。
pub fn can_deal_from_stock(stock_is_empty: bool) -> bool {
    !stock_is_empty
}

/// 山札が空のときに、捨て札から山札にカードを戻せるかチェックする。
/// オプションで有効にした時だけ使われるよ。
pub fn can_reset_stock_from_waste(stock_is_empty: bool, waste_is_empty: bool) -> bool {
    stock_is_empty && !waste_is_empty
}

/// 山札に `stock_len` 枚ある時に、実際に何枚めくれるか。
pub fn cards_to_draw(stock_len: usize) -> usize {
    stock_len.min(DRAW_COUNT)
}
