//! Label text normalization.
//!
//! Raw feed labels (headsigns, stop names, route long names) carry ad-hoc
//! spelling, spacing, and casing. A [`Normalizer`] runs an ordered pipeline
//! of substitution rules over a label and finishes with a locale-aware
//! hygiene pass. Normalization is total: text that matches nothing passes
//! through unchanged, and normalizing twice gives the same result as
//! normalizing once.

mod hygiene;

use regex::Regex;

/// Error returned when a substitution pattern does not compile.
#[derive(Debug, thiserror::Error)]
#[error("invalid substitution pattern: {0}")]
pub struct InvalidSubstitution(#[from] regex::Error);

/// Locale hint selecting the hygiene pass behavior.
///
/// French labels treat the apostrophe as a word boundary so elisions
/// capitalize the way this operator's displays do ("Gare D'Autocars");
/// English labels keep possessives lowercase ("King's Cross").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    French,
    English,
}

/// One ordered step of the substitution pipeline.
///
/// The pattern is a regex applied with [`Regex::replace_all`]; the
/// replacement may reference capture groups as `${n}` so boundary
/// characters caught by the pattern are written back unchanged.
#[derive(Debug, Clone)]
pub struct SubstitutionRule {
    pattern: Regex,
    replacement: String,
}

impl SubstitutionRule {
    /// Compile a substitution rule.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self, InvalidSubstitution> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            replacement: replacement.to_string(),
        })
    }

    /// Apply the rule to a label. Unmatched text is returned unchanged.
    pub fn apply(&self, label: &str) -> String {
        self.pattern
            .replace_all(label, self.replacement.as_str())
            .into_owned()
    }
}

/// An ordered substitution pipeline plus a locale hygiene pass.
///
/// Rule order is significant: later rules may rely on earlier rules having
/// already resolved a spelling variant (e.g. a hyphenation fix must run
/// before a rule whose pattern expects the hyphenated form).
///
/// # Examples
///
/// ```
/// use trip_labeler::normalize::{Locale, Normalizer, SubstitutionRule};
///
/// let rules = vec![
///     SubstitutionRule::new(r"(?i)(^|\W)centre ville(\W|$)", "${1}Centre-Ville${2}").unwrap(),
/// ];
/// let normalizer = Normalizer::new(Locale::French, rules);
///
/// assert_eq!(normalizer.normalize("gare (centre ville)"), "Gare (Centre-Ville)");
/// ```
#[derive(Debug, Clone)]
pub struct Normalizer {
    locale: Locale,
    rules: Vec<SubstitutionRule>,
}

impl Normalizer {
    /// Create a normalizer from an ordered rule list.
    pub fn new(locale: Locale, rules: Vec<SubstitutionRule>) -> Self {
        Self { locale, rules }
    }

    /// Returns the locale hint this normalizer was built with.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Normalize a raw label.
    ///
    /// Spacing and bounding punctuation are straightened before the rules
    /// run, so patterns can match on single-spaced, cleanly-terminated
    /// text; the full hygiene pass (straightening, abbreviations, casing)
    /// runs after.
    pub fn normalize(&self, raw: &str) -> String {
        let mut label = hygiene::straighten(raw);
        for rule in &self.rules {
            label = rule.apply(&label);
        }
        hygiene::clean(&label, self.locale)
    }
}
