// src/components/mod.rs

// ゲームの状態を作るデータ部品たち！
pub mod card;
pub mod dragging_info;
pub mod pile;
pub mod position;
pub mod stack;

pub use card::{Card, CardColor, Rank, Suit};
pub use dragging_info::DraggingInfo;
pub use pile::Pile;
pub use position::{Position, Rect};
pub use stack::StackType;
