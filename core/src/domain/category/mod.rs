//! Category labels.
//!
//! Categories are free-form labels stored on each prompt. They are compared
//! case-insensitively and always presented with initial capitals per word, so
//! `"prompt engineering"`, `"Prompt Engineering"` and `"PROMPT engineering"`
//! name the same category.

use std::collections::BTreeSet;

/// Upper-cases the first character of every whitespace-delimited word and
/// lower-cases the rest. Words are re-joined with single spaces, so leading,
/// trailing and repeated whitespace disappear.
///
/// The function is idempotent: applying it twice yields the same string as
/// applying it once.
pub fn to_initial_caps(input: &str) -> String {
    input
        .split_whitespace()
        .map(capitalize_word)
        .collect::<Vec<String>>()
        .join(" ")
}

fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    // Some characters expand when upper-cased ("ß" -> "SS"); keep only the
    // leading one upper-case so a second pass does not change the word.
    let mut upper = first.to_uppercase();
    let mut output = String::with_capacity(word.len());
    if let Some(leading) = upper.next() {
        output.push(leading);
    }
    output.extend(upper.flat_map(char::to_lowercase));
    output.extend(chars.flat_map(char::to_lowercase));
    output
}

/// Null-tolerant variant of [`to_initial_caps`]; a missing label becomes `""`.
pub fn normalize_category(input: Option<&str>) -> String {
    input.map(to_initial_caps).unwrap_or_default()
}

/// Case-insensitive category equality.
pub fn same_category(left: &str, right: &str) -> bool {
    left.to_lowercase() == right.to_lowercase()
}

/// Normalizes every label, drops duplicates and sorts ascending.
pub fn distinct_categories<I, S>(categories: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    categories
        .into_iter()
        .map(|category| to_initial_caps(category.as_ref()))
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}
