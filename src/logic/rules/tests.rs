// src/logic/rules/tests.rs
//! rules モジュール内の関数のユニットテスト。

use super::*;
use crate::components::card::{Card, Rank, Suit};
use crate::components::stack::StackType;

fn card(rank: Rank, suit: Suit) -> Card {
    Card::face_up(rank, suit)
}

#[test]
fn test_empty_tableau_accepts_only_king() {
    assert!(!can_move_to_tableau(None, &card(Rank::Seven, Suit::Spade)), "空の場札に 7♠ は置けないはず");
    assert!(can_move_to_tableau(None, &card(Rank::King, Suit::Heart)), "空の場札に K♥ は置けるはず");
    assert!(can_move_to_tableau(None, &card(Rank::King, Suit::Club)));
    assert!(!can_move_to_tableau(None, &card(Rank::Queen, Suit::Diamond)));
}

#[test]
fn test_tableau_alternating_descending() {
    let six_clubs = card(Rank::Six, Suit::Club);
    let six_hearts = card(Rank::Six, Suit::Heart);

    assert!(can_move_to_tableau(Some(&six_clubs), &card(Rank::Five, Suit::Diamond)), "6♣ に 5♦ は置けるはず");
    assert!(!can_move_to_tableau(Some(&six_hearts), &card(Rank::Five, Suit::Diamond)), "6♥ に 5♦ は置けないはず (同色)");
    assert!(!can_move_to_tableau(Some(&six_clubs), &card(Rank::Four, Suit::Club)), "6♣ に 4♣ は置けないはず (ランク違い)");
    assert!(!can_move_to_tableau(Some(&six_clubs), &card(Rank::Four, Suit::Heart)), "ランクが2つ下なのでダメ");
    assert!(!can_move_to_tableau(Some(&six_clubs), &card(Rank::Seven, Suit::Heart)), "上のランクは置けない");
}

#[test]
fn test_tableau_ace_and_king_edges() {
    // A の下には何も置けない
    let ace_spades = card(Rank::Ace, Suit::Spade);
    for suit in crate::components::card::ALL_SUITS {
        assert!(!can_move_to_tableau(Some(&ace_spades), &card(Rank::King, suit)));
    }
    // K に Q は置ける (色違いなら)
    assert!(can_move_to_tableau(Some(&card(Rank::King, Suit::Spade)), &card(Rank::Queen, Suit::Heart)));
}

#[test]
fn test_foundation_sequence() {
    let ace_spades = card(Rank::Ace, Suit::Spade);
    assert!(can_move_to_foundation(None, &ace_spades), "空の組札に A♠ は置けるはず");
    assert!(can_move_to_foundation(Some(&ace_spades), &card(Rank::Two, Suit::Spade)), "A♠ の上に 2♠ は置けるはず");
    assert!(!can_move_to_foundation(Some(&ace_spades), &card(Rank::Two, Suit::Heart)), "A♠ の上に 2♥ は置けないはず (スート違い)");
    assert!(!can_move_to_foundation(Some(&ace_spades), &card(Rank::Three, Suit::Spade)));
    assert!(!can_move_to_foundation(None, &card(Rank::Two, Suit::Spade)), "空の組札には A しか置けない");
}

#[test]
fn test_foundation_accepts_any_suit_ace() {
    for suit in crate::components::card::ALL_SUITS {
        assert!(can_move_to_foundation(None, &card(Rank::Ace, suit)));
    }
}

#[test]
fn test_move_validation_dispatch() {
    let king = card(Rank::King, Suit::Heart);
    let ace = card(Rank::Ace, Suit::Heart);
    assert!(is_move_valid(StackType::Tableau(4), None, &king));
    assert!(!is_move_valid(StackType::Foundation(0), None, &king));
    assert!(is_move_valid(StackType::Foundation(0), None, &ace));
    assert!(!is_move_valid(StackType::Waste, None, &ace));
    assert!(!is_move_valid(StackType::Stock, None, &king));
}

#[test]
fn test_stock_waste_rules() {
    assert!(can_deal_from_stock(false), "ストックがあれば配れるはず");
    assert!(!can_deal_from_stock(true), "ストックが空なら配れないはず");

    assert!(!can_reset_stock_from_waste(false, false));
    assert!(!can_reset_stock_from_waste(false, true));
    assert!(can_reset_stock_from_waste(true, false), "ストックが空でウェストにあればリセットできるはず");
    assert!(!can_reset_stock_from_waste(true, true));

    assert_eq!(cards_to_draw(24), 3);
    assert_eq!(cards_to_draw(2), 2);
    assert_eq!(cards_to_draw(0), 0);
}

#[test]
fn test_win_condition() {
    assert!(check_win_condition(52));
    assert!(!check_win_condition(51));
    assert!(!check_win_condition(0));
}
