// ♟️ Chess - Square validation and move announcements

use std::ops::RangeInclusive;

pub const RANKS: RangeInclusive<u8> = 1..=8;
pub const FILES: RangeInclusive<char> = 'A'..='H';

pub fn is_valid_square(rank: u8, file: char) -> bool {
    RANKS.contains(&rank) && FILES.contains(&file)
}

/// First two letters of the first name + last two of the last name, uppercased
pub fn nick_name(first_name: &str, last_name: &str) -> String {
    let head: String = first_name.chars().take(2).collect();
    let tail_len = last_name.chars().count().saturating_sub(2);
    let tail: String = last_name.chars().skip(tail_len).collect();

    format!("{}{}", head, tail).to_uppercase()
}

/// Announce a move to a square written as file + rank, e.g. "C4"
pub fn move_message(first_name: &str, last_name: &str, square: &str) -> String {
    let name = nick_name(first_name, last_name);

    if parse_square(square).is_some() {
        format!("{} moved to {}", name, square)
    } else {
        format!("{} attempted to move to {}, but that is not a valid square", name, square)
    }
}

fn parse_square(square: &str) -> Option<(u8, char)> {
    let mut chars = square.chars();
    let file = chars.next()?;
    let rank = chars.as_str().parse::<u8>().ok()?;

    is_valid_square(rank, file).then_some((rank, file))
}
