// src/components/card.rs

use std::fmt;

use serde::{Deserialize, Serialize};

/// カードのスート（マーク）を表す列挙型だよ！❤️♦️♣️♠️
///
/// 並び順は山札を作る時の順番 (H, D, C, S) と同じ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Heart,   // ❤️
    Diamond, // ♦️
    Club,    // ♣️
    Spade,   // ♠️
}

/// カードのランク（数字）を表す列挙型だよ！ A, 2, 3, ..., K
///
/// `Ord` を derive してるので A < 2 < ... < K の大小比較がそのまま使える。
/// 隣り合っているかの判定は [`Rank::value`] の差で見るよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,  // 11
    Queen, // 12
    King,  // 13
}

/// 山札を作る時に使う全スートの配列。
pub const ALL_SUITS: [Suit; 4] = [Suit::Heart, Suit::Diamond, Suit::Club, Suit::Spade];

/// 全ランクの配列 (A から K の昇順)。
pub const ALL_RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

impl Rank {
    /// A = 1 ... K = 13 の数値。
    pub fn value(self) -> u8 {
        self as u8
    }

    /// 画像ファイル名などで使う短い表記 ("A", "2", ..., "10", "J", "Q", "K")。
    pub fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

impl Suit {
    pub fn letter(self) -> char {
        match self {
            Suit::Heart => 'H',
            Suit::Diamond => 'D',
            Suit::Club => 'C',
            Suit::Spade => 'S',
        }
    }

    /// スートからカードの色を取得する。
    pub fn color(self) -> CardColor {
        match self {
            Suit::Heart | Suit::Diamond => CardColor::Red,
            Suit::Club | Suit::Spade => CardColor::Black,
        }
    }
}

/// カードの色（赤か黒か）。場札のルール判定で使うよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardColor {
    Red,
    Black,
}

/// カード1枚を表す構造体だよ！🃏
///
/// - `suit` と `rank` がカードの「正体」。1ゲームの中で同じ組み合わせは1枚だけ。
/// - `is_face_up` だけが変化する状態。
///
/// 画像ハンドルみたいな見た目の情報は持たないよ。描画側が
/// (rank, suit, is_face_up) から好きに決めてね、という分担。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    pub is_face_up: bool,
}

impl Card {
    /// 裏向きのカードを作る。
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { suit, rank, is_face_up: false }
    }

    /// 表向きのカードを作る (テストやルール判定用に便利)。
    pub fn face_up(rank: Rank, suit: Suit) -> Self {
        Self { suit, rank, is_face_up: true }
    }

    pub fn color(&self) -> CardColor {
        self.suit.color()
    }

    /// 表裏をひっくり返す。
    pub fn flip(&mut self) {
        self.is_face_up = !self.is_face_up;
    }

    /// 必ず表向きにする。場札の一番上が新しく見えた時に使う。
    pub fn set_face_up(&mut self) {
        self.is_face_up = true;
    }

    /// rank と suit が同じなら同じカード (表裏は見ない)。
    pub fn same_identity(&self, other: &Card) -> bool {
        self.rank == other.rank && self.suit == other.suit
    }
}

/// "10H" や "AS" みたいな表記。元の画像アセット名と同じ形だよ。
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.letter())
    }
}
