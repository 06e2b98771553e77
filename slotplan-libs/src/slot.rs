use once_cell::sync::Lazy;
use regex::Regex;

// Only the leading `YYYY-MM-DDTHH:mm` is checked, anything after it
// (seconds, offsets) is passed through untouched.
static SLOT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}")
        .expect("Invalid slot pattern")
});

/// Checks that `slot` starts with a `YYYY-MM-DDTHH:mm` date and time.
///
/// This is a purely lexical check: calendar validity, ranges and timezones
/// are not looked at. Because of the fixed width prefix, comparing two valid
/// slots as strings orders them chronologically.
///
/// # Examples
/// ```
/// use slotplan_libs::slot::is_valid_slot;
///
/// assert!(is_valid_slot("2025-01-01T10:00"));
/// assert!(is_valid_slot("2025-01-01T10:00:00Z"));
/// assert!(is_valid_slot("2025-13-45T99:99"));
///
/// assert!(!is_valid_slot("2025-01-01 10:00"));
/// assert!(!is_valid_slot("tomorrow"));
/// assert!(!is_valid_slot("2025-1-1T10:00"));
/// ```
pub fn is_valid_slot(slot: &str) -> bool {
    SLOT_PATTERN.is_match(slot)
}

#[cfg(test)]
mod tests {
    use super::is_valid_slot;

    #[test]
    fn rejects_non_ascii_digits() {
        // `\d` would let these through
        assert!(!is_valid_slot("２０２５-01-01T10:00"));
        assert!(!is_valid_slot("2025-01-01T١٠:00"));
    }

    #[test]
    fn requires_the_prefix_at_the_start() {
        assert!(!is_valid_slot(" 2025-01-01T10:00"));
        assert!(!is_valid_slot("at 2025-01-01T10:00"));
        assert!(!is_valid_slot(""));
        assert!(!is_valid_slot("2025-01-01T10"));
    }
}
