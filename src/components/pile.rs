// src/components/pile.rs

use log::error;

use crate::app::layout_calculator;
use crate::components::card::Card;
use crate::components::position::{Position, Rect};
use crate::components::stack::StackType;
use crate::logic::rules;

/// カードの山 (場札・組札・捨て札) だよ。
///
/// `cards[0]` が一番下、最後の要素が一番上。
/// どのルールで受け入れるかは `stack_type` で決まる。
#[derive(Debug, Clone, PartialEq)]
pub struct Pile {
    stack_type: StackType,
    cards: Vec<Card>,
    anchor: Position,
}

impl Pile {
    pub fn new(stack_type: StackType) -> Self {
        Self { stack_type, cards: Vec::new(), anchor: Position::default() }
    }

    pub fn tableau(index: u8) -> Self {
        Self::new(StackType::Tableau(index))
    }

    pub fn foundation(index: u8) -> Self {
        Self::new(StackType::Foundation(index))
    }

    pub fn waste() -> Self {
        Self::new(StackType::Waste)
    }

    pub fn stack_type(&self) -> StackType {
        self.stack_type
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

    pub fn top_card(&self) -> Option<&Card> {
        self.cards.last()
    }

    pub fn anchor(&self) -> Position {
        self.anchor
    }

    pub fn set_anchor(&mut self, anchor: Position) {
        self.anchor = anchor;
    }

    /// 一番上にカードを積む。ルールのチェックはしないので、
    /// 呼び出し側で先に [`Pile::can_accept`] を確認しておくこと。
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// 指定されたカード (rank と suit で特定) を取り除いて返す。
    ///
    /// # Panics
    /// カードがこの山に無い場合。どこかで状態が壊れているので黙って無視はしない。
    pub fn remove_card(&mut self, card: &Card) -> Card {
        match self.cards.iter().position(|c| c.same_identity(card)) {
            Some(index) => self.cards.remove(index),
            None => {
                error!("remove_card: {} is not in {}", card, self.stack_type);
                panic!("card {} is not in pile {}", card, self.stack_type);
            }
        }
    }

    /// 全部取り出して空にする。
    pub fn take_all(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards)
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// 一番上のカードを表向きにする。場札からカードが移動した後に呼ぶよ。
    /// 表向きにしたら true。
    pub fn reveal_top_card(&mut self) -> bool {
        match self.cards.last_mut() {
            Some(top) if !top.is_face_up => {
                top.set_face_up();
                true
            }
            _ => false,
        }
    }

    /// このカードを一番上に置けるか。状態は変更しない。
    pub fn can_accept(&self, card: &Card) -> bool {
        rules::is_move_valid(self.stack_type, self.top_card(), card)
    }

    /// 各カードの描画位置 (cards と同じ順番)。
    pub fn card_positions(&self) -> Vec<Position> {
        layout_calculator::card_positions(self.stack_type, self.anchor, self.cards.len())
    }

    /// 描画されるカードのインデックス範囲の先頭。
    /// 組札は一番上の1枚、捨て札は最新の3枚、場札は全部。
    pub fn first_visible_index(&self) -> usize {
        layout_calculator::first_visible_index(self.stack_type, self.cards.len())
    }

    /// 一番上のカードの当たり判定矩形。空なら None。
    pub fn top_card_rect(&self) -> Option<Rect> {
        let last = self.cards.len().checked_sub(1)?;
        let pos = layout_calculator::card_position(self.stack_type, self.anchor, last, self.cards.len());
        Some(layout_calculator::card_rect(pos))
    }

    /// ドロップ先としての当たり判定矩形。
    /// カードがあれば一番上のカード、空ならアンカー位置のカード1枚分。
    pub fn hit_rect(&self) -> Rect {
        self.top_card_rect()
            .unwrap_or_else(|| layout_calculator::card_rect(self.anchor))
    }
}
