//! Integers spoken in narration text.

use std::collections::BTreeSet;

/// Number words recognised as substrings, with their values.
///
/// Compound words are matched independently of their parts, so `十二`
/// contributes 2, 10 and 12.
pub const NUMBER_WORDS: [(&str, i64); 12] = [
    ("一", 1),
    ("二", 2),
    ("三", 3),
    ("四", 4),
    ("五", 5),
    ("六", 6),
    ("七", 7),
    ("八", 8),
    ("九", 9),
    ("十", 10),
    ("十一", 11),
    ("十二", 12),
];

/// Extract every integer mentioned in `text`: base-10 ASCII digit runs plus
/// the number words that occur anywhere in it.
///
/// # Examples
///
/// ```
/// use nqa_parser::extract_numbers;
///
/// let numbers: Vec<i64> = extract_numbers("3 加 五 等于 8").into_iter().collect();
/// assert_eq!(numbers, vec![3, 5, 8]);
/// ```
#[must_use]
pub fn extract_numbers(text: &str) -> BTreeSet<i64> {
    let mut numbers: BTreeSet<i64> = text
        .split(|c: char| !c.is_ascii_digit())
        .filter(|run| !run.is_empty())
        .filter_map(|run| run.parse::<i64>().ok())
        .collect();

    numbers.extend(
        NUMBER_WORDS
            .iter()
            .filter(|(word, _)| text.contains(word))
            .map(|(_, value)| *value),
    );
    numbers
}
