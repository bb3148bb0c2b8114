// 🃏 Blackjack - Card values and first-turn strategy
// Cards arrive as lowercase names ("ace", "king", ...)

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// CARD
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Card {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Card {
    /// Blackjack value of the card (aces always count as 11 here)
    pub fn value(&self) -> u8 {
        match self {
            Card::Two => 2,
            Card::Three => 3,
            Card::Four => 4,
            Card::Five => 5,
            Card::Six => 6,
            Card::Seven => 7,
            Card::Eight => 8,
            Card::Nine => 9,
            Card::Ten | Card::Jack | Card::Queen | Card::King => 10,
            Card::Ace => 11,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Card::Two => "two",
            Card::Three => "three",
            Card::Four => "four",
            Card::Five => "five",
            Card::Six => "six",
            Card::Seven => "seven",
            Card::Eight => "eight",
            Card::Nine => "nine",
            Card::Ten => "ten",
            Card::Jack => "jack",
            Card::Queen => "queen",
            Card::King => "king",
            Card::Ace => "ace",
        }
    }
}

impl FromStr for Card {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let card = match s {
            "two" => Card::Two,
            "three" => Card::Three,
            "four" => Card::Four,
            "five" => Card::Five,
            "six" => Card::Six,
            "seven" => Card::Seven,
            "eight" => Card::Eight,
            "nine" => Card::Nine,
            "ten" => Card::Ten,
            "jack" => Card::Jack,
            "queen" => Card::Queen,
            "king" => Card::King,
            "ace" => Card::Ace,
            other => return Err(anyhow!("Unknown card: {:?}", other)),
        };
        Ok(card)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Value of a card by name, 0 for anything that isn't a card
pub fn parse_card(card: &str) -> u8 {
    card.parse::<Card>().map(|c| c.value()).unwrap_or(0)
}

// ============================================================================
// FIRST TURN
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Stand,
    Hit,
    Split,
    Win,
}

impl Decision {
    /// Single-letter code used at the table
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Stand => "S",
            Decision::Hit => "H",
            Decision::Split => "P",
            Decision::Win => "W",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decide the first move given the player's two cards and the dealer's card.
///
/// Rules are checked in order: pair of aces splits, blackjack wins unless the
/// dealer shows a ten or an ace, 17+ stands, 12-16 stands against a dealer
/// below 7, everything else hits.
pub fn first_turn(card1: &str, card2: &str, dealer_card: &str) -> Decision {
    let (val1, val2, dealer) = (parse_card(card1), parse_card(card2), parse_card(dealer_card));
    let sum = val1 + val2;

    match sum {
        _ if val1 == 11 && val2 == 11 => Decision::Split,
        21 if dealer < 10 => Decision::Win,
        17..=21 => Decision::Stand,
        12..=16 if dealer < 7 => Decision::Stand,
        _ => Decision::Hit,
    }
}

// ============================================================================
// TESTS
// ============================================================================
