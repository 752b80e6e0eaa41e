// src/game_state.rs
//! ゲーム全体の状態 (山札・場札・組札・捨て札) を持つ構造体だよ。
//! 準備 (setup)、配る (deal)、リスタート (restart) の流れもここで管理する。

use std::collections::HashSet;

use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::app::layout_calculator;
use crate::components::card::Card;
use crate::components::pile::Pile;
use crate::components::stack::StackType;
use crate::config::layout::{FOUNDATION_COUNT, TABLEAU_COUNT};
use crate::config::GameOptions;
use crate::logic::deck::Deck;
use crate::logic::rules;

/// 1ゲームで使うカードの枚数。
pub const TOTAL_CARDS: usize = 52;

/// ゲームの進行状況。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// まだ配っていない (スタートボタン待ち)。
    NotStarted,
    /// プレイ中。
    Playing,
    /// 全部のカードが組札に乗った！🏆
    Won,
}

/// ゲームの状態。入力処理 (`InteractionController`) はこれを受け取って操作するよ。
///
/// グローバル変数は使わず、`GameApp` がこの値を1つ持つ。
pub struct GameState {
    deck: Deck,
    tableau_piles: Vec<Pile>,
    foundation_piles: Vec<Pile>,
    waste_pile: Pile,
    options: GameOptions,
    rng: StdRng,
    /// スタートが押されて、次のフレームで配る予定か。
    start_requested: bool,
    /// このゲームでもう配ったか。1ゲームにつき1回だけ配るためのフラグ。
    cards_dealt: bool,
}

impl GameState {
    /// 乱数のシードは OS (ブラウザなら crypto.getRandomValues) から取る。
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// シード固定。同じシードなら同じ配り方になるよ。
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        let mut state = Self {
            deck: Deck::new(),
            tableau_piles: (0..TABLEAU_COUNT as u8).map(Pile::tableau).collect(),
            foundation_piles: (0..FOUNDATION_COUNT as u8).map(Pile::foundation).collect(),
            waste_pile: Pile::waste(),
            options: GameOptions::default(),
            rng,
            start_requested: false,
            cards_dealt: false,
        };
        state.setup();
        state
    }

    /// 山札を作り直してシャッフルし、各スタックの位置を決める。配りはしない。
    pub fn setup(&mut self) {
        self.deck.clear();
        self.deck.fill();
        self.deck.shuffle_with(&mut self.rng);
        self.set_piles();
        info!("Game set up: {} cards in the stock.", self.deck.len());
    }

    /// 各スタックのアンカー位置を計算する。
    fn set_piles(&mut self) {
        for pile in self
            .tableau_piles
            .iter_mut()
            .chain(self.foundation_piles.iter_mut())
            .chain(std::iter::once(&mut self.waste_pile))
        {
            pile.set_anchor(layout_calculator::pile_anchor(pile.stack_type()));
        }
    }

    /// 場札に配る。もう配っている場合は何もしない。
    pub fn deal(&mut self) {
        if self.cards_dealt {
            warn!("deal() called twice for the same game; ignoring.");
            return;
        }
        self.deck.deal(&mut self.tableau_piles);
        self.cards_dealt = true;
    }

    /// 場札・組札・捨て札を空にして、配ったフラグを戻す。
    /// 山札の作り直しはしないので、この後 [`GameState::setup`] を呼ぶこと。
    pub fn restart(&mut self) {
        for pile in self.tableau_piles.iter_mut().chain(self.foundation_piles.iter_mut()) {
            pile.clear();
        }
        self.waste_pile.clear();
        self.cards_dealt = false;
        info!("Game restarted.");
    }

    /// スタート (リスタート) ボタンが押された。
    ///
    /// まだ配っていなければ準備し直して配る予約をする。
    /// 配った後なら restart + setup してから配る予約をする。
    /// 実際に配るのは次の [`GameState::tick`]。リスタートした時は true を返すよ。
    pub fn request_start(&mut self) -> bool {
        let restarted = if self.cards_dealt {
            self.restart();
            true
        } else {
            false
        };
        self.setup();
        self.start_requested = true;
        restarted
    }

    /// 1フレーム分の処理。配る予約があればここで1回だけ配る。配ったら true。
    pub fn tick(&mut self) -> bool {
        if self.start_requested && !self.cards_dealt {
            self.deal();
            return true;
        }
        false
    }

    pub fn is_dealt(&self) -> bool {
        self.cards_dealt
    }

    pub fn status(&self) -> GameStatus {
        if !self.cards_dealt {
            GameStatus::NotStarted
        } else if self.is_won() {
            GameStatus::Won
        } else {
            GameStatus::Playing
        }
    }

    pub fn options(&self) -> GameOptions {
        self.options
    }

    pub fn set_options(&mut self, options: GameOptions) {
        self.options = options;
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn tableau_piles(&self) -> &[Pile] {
        &self.tableau_piles
    }

    pub fn foundation_piles(&self) -> &[Pile] {
        &self.foundation_piles
    }

    pub fn waste_pile(&self) -> &Pile {
        &self.waste_pile
    }

    /// 山札と捨て札を同時に変更したい時用 (山札クリック)。
    pub fn deck_and_waste_mut(&mut self) -> (&mut Deck, &mut Pile) {
        (&mut self.deck, &mut self.waste_pile)
    }

    /// `StackType` からスタックを引く。山札は `Pile` じゃないので None。
    pub fn pile(&self, stack_type: StackType) -> Option<&Pile> {
        match stack_type {
            StackType::Tableau(i) => self.tableau_piles.get(i as usize),
            StackType::Foundation(i) => self.foundation_piles.get(i as usize),
            StackType::Waste => Some(&self.waste_pile),
            StackType::Stock => None,
        }
    }

    pub fn pile_mut(&mut self, stack_type: StackType) -> Option<&mut Pile> {
        match stack_type {
            StackType::Tableau(i) => self.tableau_piles.get_mut(i as usize),
            StackType::Foundation(i) => self.foundation_piles.get_mut(i as usize),
            StackType::Waste => Some(&mut self.waste_pile),
            StackType::Stock => None,
        }
    }

    /// 全スタックをまとめて (場札 → 組札 → 捨て札の順)。
    pub fn all_piles(&self) -> impl Iterator<Item = &Pile> {
        self.tableau_piles
            .iter()
            .chain(self.foundation_piles.iter())
            .chain(std::iter::once(&self.waste_pile))
    }

    /// `card` を `from` から `to` に移す。ルールのチェックは呼び出し側で済ませておくこと。
    /// 移動元が場札なら、新しく一番上になったカードを表向きにするよ。
    ///
    /// # Panics
    /// `from` / `to` が山札や範囲外の番号だったり、`card` が `from` に無い場合。
    pub fn move_card(&mut self, card: &Card, from: StackType, to: StackType) {
        let moved = match self.pile_mut(from) {
            Some(source) => source.remove_card(card),
            None => panic!("move_card: {} is not a card pile", from),
        };
        match self.pile_mut(to) {
            Some(target) => target.add_card(moved),
            None => panic!("move_card: {} is not a card pile", to),
        }
        if let StackType::Tableau(_) = from {
            if let Some(source) = self.pile_mut(from) {
                source.reveal_top_card();
            }
        }
    }

    /// 山札 + 全スタックのカード枚数。setup 以降は常に52のはず。
    pub fn total_card_count(&self) -> usize {
        self.deck.len() + self.all_piles().map(Pile::len).sum::<usize>()
    }

    pub fn foundation_card_count(&self) -> usize {
        self.foundation_piles.iter().map(Pile::len).sum()
    }

    pub fn is_won(&self) -> bool {
        rules::check_win_condition(self.foundation_card_count())
    }

    /// カードの不変条件をチェックする。
    ///
    /// - 合計52枚で重複なし
    /// - 山札は全部裏向き
    /// - 場札は裏向きのカードが表向きのカードより下にある
    /// - 組札と捨て札は全部表向き
    pub fn validate(&self) -> Result<(), String> {
        let total = self.total_card_count();
        if total != TOTAL_CARDS {
            return Err(format!("expected {} cards in play, found {}", TOTAL_CARDS, total));
        }

        let mut seen = HashSet::with_capacity(TOTAL_CARDS);
        let all_cards = self
            .deck
            .cards()
            .iter()
            .chain(self.all_piles().flat_map(|p| p.cards().iter()));
        for card in all_cards {
            if !seen.insert((card.suit, card.rank)) {
                return Err(format!("duplicate card {}", card));
            }
        }

        if let Some(card) = self.deck.cards().iter().find(|c| c.is_face_up) {
            return Err(format!("face-up card {} in the stock", card));
        }

        for pile in &self.tableau_piles {
            let first_face_up = pile.cards().iter().position(|c| c.is_face_up).unwrap_or(pile.len());
            if pile.cards()[first_face_up..].iter().any(|c| !c.is_face_up) {
                return Err(format!("face-down card above a face-up card in {}", pile.stack_type()));
            }
        }

        for pile in self.foundation_piles.iter().chain(std::iter::once(&self.waste_pile)) {
            if let Some(card) = pile.cards().iter().find(|c| !c.is_face_up) {
                return Err(format!("face-down card {} in {}", card, pile.stack_type()));
            }
        }
        Ok(())
    }

    /// テスト用: 盤面を直接組んで「配り済み」にする。
    /// 指定しなかったカードは全部裏向きで山札に入るので、合計は52枚のまま。
    #[cfg(test)]
    pub(crate) fn arrange(&mut self, tableaus: Vec<Vec<Card>>, foundations: Vec<Vec<Card>>, waste: Vec<Card>) {
        let placed: Vec<Card> = tableaus
            .iter()
            .chain(foundations.iter())
            .flatten()
            .chain(waste.iter())
            .cloned()
            .collect();
        let rest = crate::logic::deck::create_standard_deck()
            .into_iter()
            .filter(|card| !placed.iter().any(|p| p.same_identity(card)))
            .collect();
        self.deck = Deck::from_cards(rest);

        for pile in self.tableau_piles.iter_mut().chain(self.foundation_piles.iter_mut()) {
            pile.clear();
        }
        self.waste_pile.clear();
        for (pile, cards) in self.tableau_piles.iter_mut().zip(tableaus) {
            cards.into_iter().for_each(|card| pile.add_card(card));
        }
        for (pile, cards) in self.foundation_piles.iter_mut().zip(foundations) {
            cards.into_iter().for_each(|card| pile.add_card(card));
        }
        waste.into_iter().for_each(|card| self.waste_pile.add_card(card));

        self.start_requested = true;
        self.cards_dealt = true;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Rank, Suit};
    use crate::components::position::Position;

    fn dealt_game(seed: u64) -> GameState {
        let mut game = GameState::with_seed(seed);
        game.request_start();
        assert!(game.tick());
        game
    }

    #[test]
    fn new_game_is_set_up_but_not_dealt() {
        let game = GameState::with_seed(1);
        assert_eq!(game.deck().len(), 52);
        assert!(game.all_piles().all(Pile::is_empty));
        assert!(!game.is_dealt());
        assert_eq!(game.status(), GameStatus::NotStarted);
        assert_eq!(game.total_card_count(), 52);
        assert!(game.validate().is_ok());
    }

    #[test]
    fn setup_sets_anchors() {
        let game = GameState::with_seed(1);
        assert_eq!(game.tableau_piles()[0].anchor(), Position::new(100.0, 300.0));
        assert_eq!(game.waste_pile().anchor(), Position::new(250.0, 50.0));
        assert_eq!(game.foundation_piles()[0].anchor(), Position::new(696.0, 20.0));
    }

    #[test]
    fn tick_without_start_does_nothing() {
        let mut game = GameState::with_seed(1);
        assert!(!game.tick());
        assert!(!game.is_dealt());
    }

    #[test]
    fn start_then_tick_deals_exactly_once() {
        let mut game = GameState::with_seed(2);
        assert!(!game.request_start());
        assert!(game.tick());
        assert!(game.is_dealt());
        assert_eq!(game.deck().len(), 24);
        for (i, pile) in game.tableau_piles().iter().enumerate() {
            assert_eq!(pile.len(), i + 1);
        }

        // 2回目の tick では配らない
        assert!(!game.tick());
        assert_eq!(game.deck().len(), 24);
        assert_eq!(game.status(), GameStatus::Playing);
        assert!(game.validate().is_ok());
    }

    #[test]
    fn deal_twice_is_ignored() {
        let mut game = dealt_game(3);
        game.deal();
        assert_eq!(game.deck().len(), 24);
        assert_eq!(game.total_card_count(), 52);
    }

    #[test]
    fn restart_clears_piles_and_flag() {
        let mut game = dealt_game(4);
        game.restart();
        assert!(!game.is_dealt());
        assert!(game.all_piles().all(Pile::is_empty));
        game.setup();
        assert_eq!(game.deck().len(), 52);
        assert!(game.validate().is_ok());
    }

    #[test]
    fn start_after_deal_restarts_and_deals_again() {
        let mut game = dealt_game(5);
        let (deck, waste) = game.deck_and_waste_mut();
        deck.draw_three(waste);
        assert_eq!(game.waste_pile().len(), 3);

        assert!(game.request_start(), "配った後のスタートはリスタート");
        assert!(!game.is_dealt());
        assert!(game.waste_pile().is_empty());
        assert_eq!(game.deck().len(), 52);

        assert!(game.tick());
        assert_eq!(game.deck().len(), 24);
        assert!(game.validate().is_ok());
    }

    #[test]
    fn same_seed_same_deal() {
        let a = dealt_game(99);
        let b = dealt_game(99);
        for (pa, pb) in a.tableau_piles().iter().zip(b.tableau_piles()) {
            assert_eq!(pa.cards(), pb.cards());
        }
        assert_eq!(a.deck(), b.deck());
    }

    #[test]
    fn pile_lookup() {
        let game = GameState::with_seed(1);
        assert_eq!(game.pile(StackType::Tableau(6)).map(Pile::stack_type), Some(StackType::Tableau(6)));
        assert!(game.pile(StackType::Tableau(7)).is_none());
        assert_eq!(game.pile(StackType::Foundation(3)).map(Pile::stack_type), Some(StackType::Foundation(3)));
        assert!(game.pile(StackType::Foundation(4)).is_none());
        assert!(game.pile(StackType::Waste).is_some());
        assert!(game.pile(StackType::Stock).is_none());
    }

    #[test]
    fn move_card_reveals_new_tableau_top() {
        let mut game = dealt_game(6);
        // 場札1 は [裏, 表]
        let top = game.tableau_piles()[1].top_card().cloned().expect("tableau 1 has cards");
        game.move_card(&top, StackType::Tableau(1), StackType::Foundation(0));

        let pile = &game.tableau_piles()[1];
        assert_eq!(pile.len(), 1);
        assert!(pile.top_card().is_some_and(|c| c.is_face_up), "新しい一番上は表向き");
        assert_eq!(game.foundation_piles()[0].len(), 1);
        assert_eq!(game.total_card_count(), 52);
    }

    #[test]
    fn move_last_card_leaves_empty_tableau() {
        let mut game = dealt_game(7);
        let top = game.tableau_piles()[0].top_card().cloned().expect("tableau 0 has a card");
        game.move_card(&top, StackType::Tableau(0), StackType::Tableau(1));
        assert!(game.tableau_piles()[0].is_empty());
        assert_eq!(game.tableau_piles()[1].len(), 3);
    }

    #[test]
    #[should_panic(expected = "is not in pile")]
    fn move_missing_card_panics() {
        let mut game = dealt_game(8);
        let missing = Card::face_up(Rank::Ace, Suit::Heart);
        // 捨て札は空なので必ず無い
        game.move_card(&missing, StackType::Waste, StackType::Foundation(0));
    }

    #[test]
    fn validate_detects_broken_state() {
        let mut game = dealt_game(9);
        let extra = game.deck().cards()[0].clone();
        game.pile_mut(StackType::Waste).expect("waste").add_card(extra);
        let err = game.validate().expect_err("53枚はおかしい");
        assert!(err.contains("53"), "{}", err);
    }

    #[test]
    fn won_when_all_cards_on_foundations() {
        let mut game = GameState::with_seed(10);
        game.request_start();
        game.tick();
        // テスト用に全カードを組札に積み上げる
        let mut cards: Vec<Card> = game.deck.cards().to_vec();
        game.deck.clear();
        for pile in game.tableau_piles.iter_mut() {
            cards.extend(pile.take_all());
        }
        for (i, card) in cards.into_iter().enumerate() {
            let mut card = card;
            card.set_face_up();
            game.foundation_piles[i % 4].add_card(card);
        }
        assert!(game.is_won());
        assert_eq!(game.status(), GameStatus::Won);
    }
}
