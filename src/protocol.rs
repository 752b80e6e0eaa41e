// src/protocol.rs

// このファイルは、Rust (WASM) から JS のフロントエンドに渡す
// 描画用スナップショットの形式を定義するよ！💌
// `Serialize` で JSON 文字列にして渡す。JS 側はこれを見てカードを描くだけ。
use serde::{Deserialize, Serialize};

use crate::components::card::{Rank, Suit};
use crate::components::position::Position;
pub use crate::components::stack::StackType;
use crate::game_state::GameStatus;

/// 描画するカード1枚分の情報。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CardData {
    pub suit: Suit,
    pub rank: Rank,
    pub is_face_up: bool,
    /// スタック内での描画位置。
    pub position: Position,
    /// 選択中 (ドラッグ中) のカードなら true。JS 側は元の位置には描かない。
    pub is_selected: bool,
}

/// スタック (場札・組札・捨て札) 1つ分。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PileData {
    pub stack_type: StackType,
    pub anchor: Position,
    /// 全部の枚数。見えているカードより多いことがある (組札・捨て札)。
    pub card_count: usize,
    /// 見えているカードだけ、下から順に。
    pub cards: Vec<CardData>,
}

/// 山札。中身は見せないので枚数だけ。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StockData {
    pub remaining: usize,
    pub anchor: Position,
}

/// ドラッグ中のカード。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DraggedCardData {
    pub source: StackType,
    pub suit: Suit,
    pub rank: Rank,
    pub drag_position: Position,
}

/// 1フレーム分の描画に必要な情報を全部まとめたもの。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GameStateData {
    pub status: GameStatus,
    pub dealt: bool,
    /// スタートボタンに表示する文字 ("Start" か "Restart")。
    pub start_button_label: String,
    pub stock: StockData,
    /// 場札 → 組札 → 捨て札 の順。
    pub piles: Vec<PileData>,
    pub dragged: Option<DraggedCardData>,
}
