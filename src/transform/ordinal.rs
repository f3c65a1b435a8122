//! Ordinal suffixes.

/// The suffix denoting `number`'s position in a sequence: `st`, `nd`, `rd`
/// or `th`. The sign is ignored.
pub fn ordinal(number: i64) -> &'static str {
    let n = number.unsigned_abs();
    if matches!(n % 100, 11..=13) {
        return "th";
    }
    match n % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// `number` followed by its ordinal suffix: `1002` to `1002nd`, `-11` to `-11th`.
pub fn ordinalize(number: i64) -> String {
    format!("{number}{}", ordinal(number))
}
