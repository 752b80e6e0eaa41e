// src/app/game_app.rs

use log::{debug, error, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;

use crate::app::interaction::{InputEvent, InteractionController, InteractionOutcome};
use crate::app::state_getter;
use crate::config::GameOptions;
use crate::game_state::GameState;

// --- ゲーム全体のアプリケーション状態を管理する構造体 ---
//
// JS から見えるのはこれだけ。ブラウザのイベントを受け取ってコントローラーに渡し、
// 描画用のスナップショットを JSON で返す。描画そのものは JS 側の仕事だよ。
#[wasm_bindgen]
pub struct GameApp {
    game: GameState,
    controller: InteractionController,
}

// GameApp 構造体のメソッドを実装していくよ！
#[wasm_bindgen]
impl GameApp {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        info!("GameApp: 初期化中...");
        Self::from_state(GameState::new())
    }

    /// シード固定で作る (リプレイやデバッグ用)。
    #[wasm_bindgen(js_name = withSeed)]
    pub fn with_seed(seed: u64) -> Self {
        info!("GameApp: 初期化中 (seed = {})...", seed);
        Self::from_state(GameState::with_seed(seed))
    }

    /// スタート / リスタートボタン。実際に配るのは次の `tick`。
    #[wasm_bindgen]
    pub fn start(&mut self) -> bool {
        self.apply(InputEvent::StartRequested)
    }

    /// 毎フレーム呼ぶ。配る予約があればここで配る。配ったら true (描き直しが必要)。
    #[wasm_bindgen]
    pub fn tick(&mut self) -> bool {
        self.game.tick()
    }

    #[wasm_bindgen]
    pub fn handle_pointer_down(&mut self, x: f32, y: f32) -> bool {
        self.apply(InputEvent::PointerDown { x, y })
    }

    #[wasm_bindgen]
    pub fn handle_pointer_move(&mut self, x: f32, y: f32) -> bool {
        self.apply(InputEvent::PointerMove { x, y })
    }

    #[wasm_bindgen]
    pub fn handle_pointer_up(&mut self, x: f32, y: f32) -> bool {
        self.apply(InputEvent::PointerUp { x, y })
    }

    #[wasm_bindgen]
    pub fn handle_double_click(&mut self, x: f32, y: f32) -> bool {
        self.apply(InputEvent::DoubleClick { x, y })
    }

    /// JSON で書いたイベント (例: `{"PointerDown":{"x":10.0,"y":20.0}}`) を処理する。
    #[wasm_bindgen]
    pub fn handle_event_json(&mut self, event_json: &str) -> Result<bool, JsValue> {
        let event: InputEvent = serde_json::from_str(event_json).map_err(|e| {
            let error_msg = format!("Failed to parse input event: {}", e);
            error!("{}", error_msg);
            JsValue::from_str(&error_msg)
        })?;
        Ok(self.apply(event))
    }

    /// オプションを JSON で設定する (例: `{"recycle_waste":true}`)。
    #[wasm_bindgen]
    pub fn set_options_json(&mut self, options_json: &str) -> Result<(), JsValue> {
        let options: GameOptions = serde_json::from_str(options_json).map_err(|e| {
            let error_msg = format!("Failed to parse options: {}", e);
            error!("{}", error_msg);
            JsValue::from_str(&error_msg)
        })?;
        info!("GameApp: options updated: {:?}", options);
        self.game.set_options(options);
        Ok(())
    }

    /// 描画用のスナップショットを JSON 文字列で返すよ。
    ///
    /// - `Ok(JsValue)`: JSON 文字列。
    /// - `Err(JsValue)`: JSON への変換に失敗した時のエラーメッセージ。
    #[wasm_bindgen]
    pub fn get_game_state_json(&self) -> Result<JsValue, JsValue> {
        state_getter::get_game_state_json(&self.game, self.controller.selection())
            .map(|json| JsValue::from_str(&json))
            .map_err(|e| JsValue::from_str(&e))
    }

    #[wasm_bindgen]
    pub fn is_won(&self) -> bool {
        self.game.is_won()
    }
}

impl GameApp {
    fn from_state(game: GameState) -> Self {
        Self { game, controller: InteractionController::new() }
    }

    /// イベントをコントローラーに渡す。描き直しが必要なら true。
    fn apply(&mut self, event: InputEvent) -> bool {
        let outcome: InteractionOutcome = self.controller.handle_event(&mut self.game, event);
        debug!("GameApp: {:?} -> {:?}", event, outcome);
        outcome.needs_redraw()
    }
}

impl Default for GameApp {
    fn default() -> Self {
        Self::new()
    }
}
