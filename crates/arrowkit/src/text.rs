//! String helpers.

/// Name used by [`greet`] when none is given.
pub const DEFAULT_GUEST: &str = "Guest";

pub fn greet(name: Option<&str>) -> String {
    format!("Hello, {}!", name.unwrap_or(DEFAULT_GUEST))
}

pub fn to_upper(s: &str) -> String {
    s.to_uppercase()
}

/// Reverses a string by Unicode scalar value.
pub fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}

/// Counts ASCII vowels, ignoring case.
pub fn count_vowels(s: &str) -> usize {
    s.chars()
        .filter(|c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn greet_defaults_to_guest() {
        assert_eq!(greet(Some("Anjum")), "Hello, Anjum!");
        assert_eq!(greet(None), "Hello, Guest!");
    }

    #[test]
    fn upper_and_reverse() {
        assert_eq!(to_upper("arrow"), "ARROW");
        assert_eq!(reverse("Arrow"), "worrA");
        assert_eq!(reverse(""), "");
        assert_eq!(reverse("héllo"), "olléh");
    }

    #[test_case("JavaScript", 3)]
    #[test_case("AEIOU", 5)]
    #[test_case("rhythm", 0)]
    #[test_case("", 0)]
    fn vowels_in(s: &str, expected: usize) {
        assert_eq!(count_vowels(s), expected);
    }
}
