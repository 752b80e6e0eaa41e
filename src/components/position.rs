// src/components/position.rs

use serde::{Deserialize, Serialize};

/// 画面上の位置 (ウィンドウのピクセル座標、左上が原点)。📍
///
/// カードの描画位置にも、スタックのアンカー (基準点) にも使うよ。
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// 当たり判定用の矩形。左上 (x, y) と幅・高さで表すよ。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// 左上の位置とサイズから矩形を作る。
    pub fn at(origin: Position, width: f32, height: f32) -> Self {
        Self::new(origin.x, origin.y, width, height)
    }

    /// 点が矩形の中にあるか。左と上の辺は含む、右と下の辺は含まない。
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }
}
