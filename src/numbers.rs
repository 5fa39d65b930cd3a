//! Spoken number words used by the command parser

/// Hour words, "one" through "twelve"
const HOURS: &[(&str, u32)] = &[
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
    ("eleven", 11),
    ("twelve", 12),
];

const ONES: &[(&str, u32)] = &[
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
];

const TEENS: &[(&str, u32)] = &[
    ("ten", 10),
    ("eleven", 11),
    ("twelve", 12),
    ("thirteen", 13),
    ("fourteen", 14),
    ("fifteen", 15),
    ("sixteen", 16),
    ("seventeen", 17),
    ("eighteen", 18),
    ("nineteen", 19),
];

const TENS: &[(&str, u32)] = &[
    ("twenty", 20),
    ("thirty", 30),
    ("forty", 40),
    ("fifty", 50),
    ("sixty", 60),
    ("seventy", 70),
    ("eighty", 80),
    ("ninety", 90),
];

fn lookup(table: &[(&str, u32)], word: &str) -> Option<u32> {
    table.iter().find(|(w, _)| *w == word).map(|(_, n)| *n)
}

pub fn hour_word(word: &str) -> Option<u32> {
    lookup(HOURS, word)
}

/// "one" through "nine"
pub fn single_digit(word: &str) -> Option<u32> {
    lookup(ONES, word)
}

pub fn teen(word: &str) -> Option<u32> {
    lookup(TEENS, word)
}

/// "twenty" through "ninety"
pub fn tens(word: &str) -> Option<u32> {
    lookup(TENS, word)
}

/// Regex alternation of the hour words, e.g. `one|two|...|twelve`
pub fn hour_alternation() -> String {
    alternation(HOURS)
}

/// Regex alternation of "one" through "nine"
pub fn single_digit_alternation() -> String {
    alternation(ONES)
}

/// Regex alternation of every word that can stand for minutes before "past"
pub fn past_minute_alternation() -> String {
    let mut words: Vec<&str> = ONES.iter().map(|(w, _)| *w).collect();
    words.extend(TEENS.iter().map(|(w, _)| *w));
    words.extend(TENS.iter().take(4).map(|(w, _)| *w));
    words.extend(["quarter", "half"]);
    // Longest first so "fourteen" is not cut short at "four"
    words.sort_by(|a, b| b.len().cmp(&a.len()));
    words.join("|")
}

fn alternation(table: &[(&str, u32)]) -> String {
    let mut words: Vec<&str> = table.iter().map(|(w, _)| *w).collect();
    words.sort_by(|a, b| b.len().cmp(&a.len()));
    words.join("|")
}

/// Minutes spelled out as leading words, e.g. `["twenty", "five", ...]` -> 25
///
/// Returns the value and how many words it consumed. Only values 1-59 are
/// accepted.
pub fn leading_minutes(words: &[&str]) -> Option<(u32, usize)> {
    let first = *words.first()?;

    if let Some(t) = tens(first).filter(|t| *t < 60) {
        if let Some(d) = words.get(1).and_then(|w| single_digit(w)) {
            return Some((t + d, 2));
        }
        return Some((t, 1));
    }

    match first {
        "quarter" => return Some((15, 1)),
        "half" => return Some((30, 1)),
        _ => {}
    }

    teen(first)
        .or_else(|| single_digit(first))
        .map(|m| (m, 1))
}

/// Quantity spoken right before `index`, e.g. "seventy five" in
/// "seventy five seconds". Digits and "a"/"an" count too.
pub fn quantity_before(words: &[&str], index: usize) -> Option<u64> {
    let prev = *words.get(index.checked_sub(1)?)?;

    if let Ok(n) = prev.parse::<u64>() {
        return Some(n);
    }

    if let Some(d) = single_digit(prev) {
        let tens_value = index
            .checked_sub(2)
            .and_then(|i| words.get(i))
            .and_then(|w| tens(w));
        return Some(u64::from(tens_value.unwrap_or(0) + d));
    }

    if prev == "a" || prev == "an" {
        return Some(1);
    }

    teen(prev).or_else(|| tens(prev)).map(u64::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookups() {
        assert_eq!(hour_word("seven"), Some(7));
        assert_eq!(hour_word("thirteen"), None);
        assert_eq!(single_digit("nine"), Some(9));
        assert_eq!(single_digit("ten"), None);
        assert_eq!(teen("fifteen"), Some(15));
        assert_eq!(tens("forty"), Some(40));
    }

    #[test]
    fn test_leading_minutes() {
        assert_eq!(leading_minutes(&["twenty", "five", "pm"]), Some((25, 2)));
        assert_eq!(leading_minutes(&["thirty"]), Some((30, 1)));
        assert_eq!(leading_minutes(&["fifteen", "am"]), Some((15, 1)));
        assert_eq!(leading_minutes(&["five"]), Some((5, 1)));
        assert_eq!(leading_minutes(&["sixty"]), None);
        assert_eq!(leading_minutes(&["pm"]), None);
        assert_eq!(leading_minutes(&[]), None);
    }

    #[test]
    fn test_quantity_before() {
        let words = ["timer", "for", "seventy", "five", "seconds"];
        assert_eq!(quantity_before(&words, 4), Some(75));

        let words = ["an", "hour"];
        assert_eq!(quantity_before(&words, 1), Some(1));

        let words = ["90", "minutes"];
        assert_eq!(quantity_before(&words, 1), Some(90));

        let words = ["timer", "for", "minutes"];
        assert_eq!(quantity_before(&words, 2), None);

        let words = ["minutes"];
        assert_eq!(quantity_before(&words, 0), None);
    }

    #[test]
    fn test_alternations_prefer_longest() {
        let alt = past_minute_alternation();
        let fourteen = alt.find("fourteen").unwrap();
        let four = alt.find("four|").unwrap_or(alt.len());
        assert!(fourteen < four);
    }
}
