// src/logic/auto_move.rs
//! カードの自動移動に関するロジックをまとめるモジュールだよ！🪄
//! ダブルクリックされたカードをどの組札に送れるか判断するんだ。

use log::debug;

use crate::components::card::Card;
use crate::components::pile::Pile;
use crate::components::stack::StackType;

/// `card` を置ける最初の組札を探す。見つからなければ None。
///
/// 組札は番号順にチェックするので、空の組札が複数ある時の A は一番若い番号に行くよ。
pub fn find_automatic_foundation_move(foundations: &[Pile], card: &Card) -> Option<StackType> {
    let target = foundations
        .iter()
        .find(|pile| pile.can_accept(card))
        .map(Pile::stack_type);
    debug!("[AutoMove] {} -> {:?}", card, target);
    target
}
