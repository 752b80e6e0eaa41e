// src/logic/deck.rs

use itertools::iproduct;
use log::{debug, info};
use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};

use crate::components::card::{Card, ALL_RANKS, ALL_SUITS};
use crate::components::pile::Pile;
use crate::config::layout::TABLEAU_COUNT;
use crate::logic::rules::stock_waste;

/// 場札に配る枚数の合計 (1 + 2 + ... + 7)。
pub const INITIAL_DEAL_COUNT: usize = TABLEAU_COUNT * (TABLEAU_COUNT + 1) / 2;

/// 標準的な52枚のカードデッキを生成する関数だよ！🃏
///
/// スート順 (H, D, C, S) に A から K まで。全部裏向き。
pub fn create_standard_deck() -> Vec<Card> {
    iproduct!(ALL_SUITS, ALL_RANKS)
        .map(|(suit, rank)| Card::new(rank, suit))
        .collect()
}

/// まだ配っていないカードの山 (山札) だよ。
///
/// `cards` の最後が一番上。配る時もめくる時も最後から取る。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn new() -> Self {
        Self { cards: Vec::with_capacity(52) }
    }

    /// カードを指定して山札を作る (テストで盤面を組む時用)。
    #[cfg(test)]
    pub(crate) fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// 52枚を全部入れる。
    ///
    /// # Panics
    /// 山札が空じゃない時。先に [`Deck::clear`] を呼ぶこと (呼ばないとカードが重複する)。
    pub fn fill(&mut self) {
        assert!(
            self.cards.is_empty(),
            "Deck::fill called on a non-empty deck ({} cards); clear() it first",
            self.cards.len()
        );
        self.cards = create_standard_deck();
        debug!("Deck filled with {} cards.", self.cards.len());
    }

    /// `thread_rng` でシャッフルする。
    pub fn shuffle(&mut self) {
        let mut rng = thread_rng();
        self.shuffle_with(&mut rng);
    }

    /// 乱数生成器を指定してシャッフルする。シード付きで再現性のある配り方にしたい時用。
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// 7つの場札に配る。i 番目の列には i+1 枚、最後の1枚だけ表向き。
    ///
    /// # Panics
    /// 場札が7つじゃない時と、山札が28枚未満の時 (fill してから配ること)。
    pub fn deal(&mut self, tableau_piles: &mut [Pile]) {
        assert_eq!(
            tableau_piles.len(),
            TABLEAU_COUNT,
            "deal needs exactly {} tableau piles",
            TABLEAU_COUNT
        );
        assert!(
            self.cards.len() >= INITIAL_DEAL_COUNT,
            "not enough cards to deal: {} (need {})",
            self.cards.len(),
            INITIAL_DEAL_COUNT
        );
        for (tableau_index, pile) in tableau_piles.iter_mut().enumerate() {
            for card_in_tableau in 0..=tableau_index {
                let Some(mut card) = self.cards.pop() else { break };
                // その列の一番上のカードだけ表向き
                if card_in_tableau == tableau_index {
                    card.set_face_up();
                }
                pile.add_card(card);
            }
        }
        info!("Dealt {} cards to the tableau, {} left in the stock.", INITIAL_DEAL_COUNT, self.cards.len());
    }

    /// 山札から最大3枚を捨て札に移して表向きにする。
    /// 残りが3枚未満ならある分だけ、空なら何もしない。移した枚数を返すよ。
    pub fn draw_three(&mut self, waste_pile: &mut Pile) -> usize {
        let count = stock_waste::cards_to_draw(self.cards.len());
        for _ in 0..count {
            if let Some(mut card) = self.cards.pop() {
                card.set_face_up();
                waste_pile.add_card(card);
            }
        }
        debug!("Drew {} card(s) to the waste, {} left in the stock.", count, self.cards.len());
        count
    }

    /// 捨て札を全部裏向きで山札に戻す。
    /// 逆順に積み直すので、次にめくる順番は最初にめくった時と同じになる。
    pub fn recycle_from(&mut self, waste_pile: &mut Pile) -> usize {
        let mut recycled = waste_pile.take_all();
        let count = recycled.len();
        recycled.reverse();
        for mut card in recycled {
            card.is_face_up = false;
            self.cards.push(card);
        }
        info!("Recycled {} card(s) from the waste back into the stock.", count);
        count
    }
}
