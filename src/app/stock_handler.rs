// src/app/stock_handler.rs
//! Handles clicking the Stock pile (drawing three to the Waste, optionally recycling the Waste).

use log::{debug, info};

use crate::game_state::GameState;
use crate::logic::rules::stock_waste;

/// 山札クリックの結果。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockOutcome {
    /// n 枚めくって捨て札に置いた (1..=3)。
    Drew(usize),
    /// 捨て札の n 枚を裏向きで山札に戻した。
    Recycled(usize),
    /// 何もしなかった (山札が空で、戻すこともできない)。
    Empty,
}

/// 山札がクリックされた時の処理。
///
/// 山札にカードがあれば最大3枚めくる。空の場合は `recycle_waste` オプションが
/// 有効で捨て札にカードがある時だけ、捨て札を山札に戻すよ。
pub fn handle_stock_click(game: &mut GameState) -> StockOutcome {
    let recycle_enabled = game.options().recycle_waste;
    let (deck, waste) = game.deck_and_waste_mut();

    if stock_waste::can_deal_from_stock(deck.is_empty()) {
        let drawn = deck.draw_three(waste);
        info!("Drew {} card(s) from the stock ({} left).", drawn, deck.len());
        return StockOutcome::Drew(drawn);
    }

    if recycle_enabled && stock_waste::can_reset_stock_from_waste(deck.is_empty(), waste.is_empty()) {
        let recycled = deck.recycle_from(waste);
        info!("Recycled {} card(s) from the waste back to the stock.", recycled);
        return StockOutcome::Recycled(recycled);
    }

    debug!("Stock is empty; nothing to draw.");
    StockOutcome::Empty
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameOptions;

    fn dealt_game() -> GameState {
        let mut game = GameState::with_seed(21);
        game.request_start();
        game.tick();
        game
    }

    fn exhaust_stock(game: &mut GameState) {
        while !game.deck().is_empty() {
            handle_stock_click(game);
        }
    }

    #[test]
    fn click_draws_three() {
        let mut game = dealt_game();
        assert_eq!(handle_stock_click(&mut game), StockOutcome::Drew(3));
        assert_eq!(game.deck().len(), 21);
        assert_eq!(game.waste_pile().len(), 3);
        assert!(game.waste_pile().cards().iter().all(|c| c.is_face_up));
    }

    #[test]
    fn empty_stock_without_recycling_does_nothing() {
        let mut game = dealt_game();
        exhaust_stock(&mut game);
        assert_eq!(game.waste_pile().len(), 24);

        assert_eq!(handle_stock_click(&mut game), StockOutcome::Empty);
        assert_eq!(game.waste_pile().len(), 24);
        assert!(game.deck().is_empty());
    }

    #[test]
    fn empty_stock_with_recycling_returns_waste() {
        let mut game = dealt_game();
        game.set_options(GameOptions { recycle_waste: true });
        let first_drawn = {
            handle_stock_click(&mut game);
            game.waste_pile().cards()[0].clone()
        };
        exhaust_stock(&mut game);

        assert_eq!(handle_stock_click(&mut game), StockOutcome::Recycled(24));
        assert!(game.waste_pile().is_empty());
        assert_eq!(game.deck().len(), 24);
        assert!(game.deck().cards().iter().all(|c| !c.is_face_up));
        assert!(game.validate().is_ok());

        // 元の順番に戻るので、次に最初にめくれるのは最初にめくったカード
        handle_stock_click(&mut game);
        assert!(game.waste_pile().cards()[0].same_identity(&first_drawn));
    }

    #[test]
    fn recycling_with_empty_waste_does_nothing() {
        let mut game = GameState::with_seed(22);
        game.set_options(GameOptions { recycle_waste: true });
        let (deck, _) = game.deck_and_waste_mut();
        deck.clear();
        assert_eq!(handle_stock_click(&mut game), StockOutcome::Empty);
    }
}
