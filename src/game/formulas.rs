//! Game formulas and number presentation

/// XP needed to reach level 2; every doubling after that adds a level
const LEVEL_2_XP: u64 = 10_000;

/// Returns the pilot level for an amount of experience
///
/// Level 1 below 10 000 XP, level 2 at 10 000, then one more level each time
/// the XP doubles. Saturates at `u8::MAX`.
pub fn level_from_xp(xp: u64) -> u8 {
    let mut level: u8 = 1;
    let mut remaining = xp;

    while remaining >= LEVEL_2_XP && level < u8::MAX {
        remaining /= 2;
        level += 1;
    }

    level
}

/// Formats a counter with `,` between groups of three digits
///
/// ```rust
/// assert_eq!(format_thousands(1_999_888_777_666u64), "1,999,888,777,666");
/// ```
pub fn format_thousands(value: impl Into<u64>) -> String {
    let digits = value.into().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    grouped
}
