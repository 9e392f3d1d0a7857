//! Challenge rating and XP from strings like `"2 (450 XP)"`.

use crate::monster::Challenge;
use crate::parsing;
use crate::raw::RawMonster;

/// Splits the rating from its parenthesized XP figure.
///
/// Fractional ratings ("1/4") stay as written. A blank rating becomes
/// "0" and a missing or malformed XP clause becomes 0, so the record
/// survives either way.
pub fn parse(monster: &RawMonster) -> Challenge {
    let trimmed = monster.challenge.trim();
    let (rating, rest) = match trimmed.split_once(" (") {
        Some((rating, rest)) => (rating, Some(rest)),
        None => (trimmed, None),
    };
    let rating = if rating.is_empty() { "0" } else { rating };
    let xp = rest
        .map(|r| r.replace(',', "").replace("XP)", ""))
        .and_then(|r| parsing::leading_int(r.trim()))
        .unwrap_or(0);

    Challenge {
        rating: rating.to_string(),
        xp,
    }
}
