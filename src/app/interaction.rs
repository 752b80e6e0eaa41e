// src/app/interaction.rs
//! ポインタ入力を受け取って、選択・ドラッグ・ドロップ・山札クリックを処理するよ。
//!
//! 状態は「何も選んでいない」か「1枚選んでいる (`DraggingInfo`)」の2つだけ。
//! 選択は離した (pointer-up) 時に必ず解除される。

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::app::event_handler::{self, ClickTarget};
use crate::app::stock_handler::{self, StockOutcome};
use crate::app::{drag_apply_handler, drag_handler};
use crate::app::drag_handler::DropResult;
use crate::components::card::Card;
use crate::components::dragging_info::DraggingInfo;
use crate::components::position::Position;
use crate::components::stack::StackType;
use crate::game_state::GameState;
use crate::logic::auto_move;

/// フロントエンドから届く入力イベント。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    PointerDown { x: f32, y: f32 },
    PointerMove { x: f32, y: f32 },
    PointerUp { x: f32, y: f32 },
    StartRequested,
    DoubleClick { x: f32, y: f32 },
}

/// 1つのイベントを処理した結果。フロントエンドが描き直すかどうかの判断に使う。
#[derive(Debug, Clone, PartialEq)]
pub enum InteractionOutcome {
    /// 何も起きなかった。
    Nothing,
    /// 山札から n 枚めくった。
    Drew(usize),
    /// 捨て札の n 枚を山札に戻した。
    Recycled(usize),
    /// カードを選択した。
    Selected(StackType),
    /// 選択中のカードの描画位置が変わった。
    Dragged(Position),
    /// カードが移動した。
    Moved { card: Card, from: StackType, to: StackType },
    /// 置ける場所がなかったので何も変わらなかった (選択は解除)。
    Rejected { from: StackType },
    /// 新しいゲームの配る予約をした。
    StartRequested,
    /// 配った後だったので、リセットしてから配る予約をした。
    Restarted,
}

impl InteractionOutcome {
    pub fn needs_redraw(&self) -> bool {
        !matches!(self, InteractionOutcome::Nothing)
    }
}

/// 入力を処理するコントローラー。選択中のカードを覚えておくだけで、
/// ゲームの状態そのものは `GameState` が持っている。
#[derive(Debug, Default)]
pub struct InteractionController {
    selection: Option<DraggingInfo>,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// 今選択しているカード。
    pub fn selection(&self) -> Option<&DraggingInfo> {
        self.selection.as_ref()
    }

    /// イベントを種類ごとに振り分ける。
    pub fn handle_event(&mut self, game: &mut GameState, event: InputEvent) -> InteractionOutcome {
        match event {
            InputEvent::PointerDown { x, y } => self.pointer_down(game, x, y),
            InputEvent::PointerMove { x, y } => self.pointer_move(x, y),
            InputEvent::PointerUp { x, y } => self.pointer_up(game, x, y),
            InputEvent::StartRequested => self.start_requested(game),
            InputEvent::DoubleClick { x, y } => self.double_click(game, x, y),
        }
    }

    /// 押した時の処理。
    ///
    /// 山札の範囲なら先にめくる。その後、同じ座標で場札 → 捨て札の順に
    /// 一番上のカードを探して選択する (山札クリックで打ち切らない)。
    /// 選択できた時は `Selected`、そうでなければ山札の結果を返すよ。
    /// カードに当たらなかった時は、今の選択をそのまま残す。
    pub fn pointer_down(&mut self, game: &mut GameState, x: f32, y: f32) -> InteractionOutcome {
        if !game.is_dealt() {
            debug!("pointer_down ignored: cards are not dealt yet.");
            return InteractionOutcome::Nothing;
        }

        let stock_outcome = if event_handler::is_stock_clicked(x, y) {
            Some(stock_handler::handle_stock_click(game))
        } else {
            None
        };

        if let Some(info) = drag_handler::handle_drag_start(game, x, y) {
            let source = info.source;
            self.selection = Some(info);
            return InteractionOutcome::Selected(source);
        }

        match stock_outcome {
            Some(StockOutcome::Drew(n)) => InteractionOutcome::Drew(n),
            Some(StockOutcome::Recycled(n)) => InteractionOutcome::Recycled(n),
            Some(StockOutcome::Empty) | None => InteractionOutcome::Nothing,
        }
    }

    /// ドラッグ中ならカードをポインタに追従させる。
    pub fn pointer_move(&mut self, x: f32, y: f32) -> InteractionOutcome {
        match self.selection.as_mut() {
            Some(info) => {
                drag_handler::update_dragged_position(info, x, y);
                InteractionOutcome::Dragged(info.drag_position)
            }
            None => InteractionOutcome::Nothing,
        }
    }

    /// 離した時の処理。置ける場所があれば移動する。選択はどちらにしても解除。
    pub fn pointer_up(&mut self, game: &mut GameState, x: f32, y: f32) -> InteractionOutcome {
        let Some(info) = self.selection.take() else {
            return InteractionOutcome::Nothing;
        };
        if !game.is_dealt() {
            debug!("pointer_up ignored: cards are not dealt yet.");
            return InteractionOutcome::Nothing;
        }

        match drag_handler::handle_drag_end(game, &info, x, y) {
            DropResult::Moved { from, to } => InteractionOutcome::Moved { card: info.card, from, to },
            DropResult::Rejected { from } => InteractionOutcome::Rejected { from },
        }
    }

    /// ダブルクリックされた一番上のカードを、置ける最初の組札に送る。
    pub fn double_click(&mut self, game: &mut GameState, x: f32, y: f32) -> InteractionOutcome {
        if !game.is_dealt() {
            return InteractionOutcome::Nothing;
        }
        self.selection = None;

        let Some(ClickTarget::Card { stack, .. }) = event_handler::find_clicked_element(game, x, y) else {
            return InteractionOutcome::Nothing;
        };
        let Some(card) = game.pile(stack).and_then(|pile| pile.top_card()).cloned() else {
            return InteractionOutcome::Nothing;
        };

        match auto_move::find_automatic_foundation_move(game.foundation_piles(), &card) {
            Some(target) => {
                drag_apply_handler::apply_move(game, &card, stack, target);
                InteractionOutcome::Moved { card, from: stack, to: target }
            }
            None => {
                debug!("No foundation accepts {}.", card);
                InteractionOutcome::Rejected { from: stack }
            }
        }
    }

    /// スタート (リスタート) ボタン。選択中のカードがあれば捨てる。
    pub fn start_requested(&mut self, game: &mut GameState) -> InteractionOutcome {
        self.selection = None;
        if game.request_start() {
            info!("Restart requested.");
            InteractionOutcome::Restarted
        } else {
            info!("Start requested.");
            InteractionOutcome::StartRequested
        }
    }
}
