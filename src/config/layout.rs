// src/config/layout.rs
//! ゲーム画面のレイアウトに関する定数を定義するよ！
//! 座標はウィンドウのピクセル座標 (左上が原点、y は下向きに増える)。

pub const WINDOW_WIDTH: f32 = 1280.0;
pub const WINDOW_HEIGHT: f32 = 720.0;

pub const CARD_WIDTH: f32 = 121.0; // カード画像の幅
pub const CARD_HEIGHT: f32 = 188.0; // カード画像の高さ

// --- 山札 (Stock) ---
pub const STOCK_POS_X: f32 = 100.0;
pub const STOCK_POS_Y: f32 = 50.0;

// --- 捨て札 (Waste) ---
pub const WASTE_POS_X: f32 = 250.0;
pub const WASTE_POS_Y: f32 = 50.0;
pub const WASTE_CARD_SPACING_X: f32 = 25.0; // めくったカードを横にずらす幅
pub const WASTE_VISIBLE_CARDS: usize = 3; // 横に広げて見せる枚数

// --- 場札 (Tableau) ---
pub const TABLEAU_COUNT: usize = 7;
pub const TABLEAU_START_X: f32 = 100.0;
pub const TABLEAU_START_Y: f32 = 300.0;
pub const TABLEAU_SPACING_X: f32 = 20.0; // 列と列のすき間
pub const TABLEAU_X_OFFSET: f32 = CARD_WIDTH + TABLEAU_SPACING_X; // 列の間隔
pub const TABLEAU_CARD_SPACING_Y: f32 = 20.0; // カードの重なり具合

// --- 組札 (Foundation) ---
pub const FOUNDATION_COUNT: usize = 4;
pub const FOUNDATION_START_X: f32 = WINDOW_WIDTH - 100.0 - FOUNDATION_COUNT as f32 * CARD_WIDTH;
pub const FOUNDATION_START_Y: f32 = 20.0;
pub const FOUNDATION_X_OFFSET: f32 = CARD_WIDTH + 20.0;
