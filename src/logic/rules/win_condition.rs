//! ゲームの勝利条件判定ロジックを定義するよ。

/// 全てのカードが組札にあればクリア。
pub fn check_win_condition(foundation_card_count: usize) -> bool {
    foundation_card_count == 52
}
