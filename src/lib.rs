// src/lib.rs

// WASM と JavaScript を繋ぐための基本！
use wasm_bindgen::prelude::*;

// 自分で作ったモジュールたち！ これでコードを整理してるんだ。
pub mod app;
pub mod components;
pub mod config;
pub mod game_state;
pub mod logger;
pub mod logic;
pub mod protocol;

pub use app::game_app::GameApp;
pub use app::interaction::{InputEvent, InteractionController, InteractionOutcome};
pub use components::{Card, Rank, StackType, Suit};
pub use config::GameOptions;
pub use game_state::{GameState, GameStatus};
pub use protocol::GameStateData;

// main 関数の代わりに、Wasm がロードされた時に最初に実行される関数だよ。
// パニックをブラウザのコンソールに出して、log マクロの出力先をつなぐ。
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    if logger::init(logger::default_level()).is_ok() {
        log::info!("Panic hook and console logger set!");
    }
}
