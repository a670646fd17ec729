//! Normalization of raw English glosses.

use thiserror::Error;

/// An error raised when a raw gloss cannot be normalized.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MeaningError {
    /// A `(` with no matching `)` in the gloss text.
    #[error("unbalanced parenthetical in `{text}`")]
    UnbalancedParenthetical { text: String },
}

/// A normalized gloss, splittable into its individual meanings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meanings {
    cleaned: String,
}

impl Meanings {
    /// Iterate over the individual meanings, in source order. Empty
    /// segments are skipped, duplicates are kept.
    pub fn iter(&self) -> impl Iterator<Item = String> + Clone + '_ {
        self.cleaned.split(';').filter_map(|segment| {
            let mut out = String::new();

            for token in segment.split_whitespace() {
                if token == "to" {
                    continue;
                }

                if !out.is_empty() {
                    out.push(' ');
                }

                out.push_str(token);
            }

            if out.is_empty() {
                None
            } else {
                Some(out)
            }
        })
    }

    /// Test if the gloss holds no meanings at all.
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

/// Normalize a raw gloss.
///
/// Strips everything that is not a letter, space, semicolon or
/// parenthesis, removes parenthetical spans, lowercases, and drops the
/// standalone token `to`. The first `(` pairs with the first `)` following
/// it; one without a partner is an error carrying the offending text.
pub fn parse_meanings(raw: &str) -> Result<Meanings, MeaningError> {
    let mut cleaned = String::with_capacity(raw.len());

    for c in raw.trim().chars() {
        if c.is_alphabetic() || matches!(c, ' ' | ';' | '(' | ')') {
            cleaned.extend(c.to_lowercase());
        }
    }

    while let Some(open) = cleaned.find('(') {
        let Some(close) = cleaned[open..].find(')') else {
            return Err(MeaningError::UnbalancedParenthetical { text: cleaned });
        };

        cleaned.replace_range(open..=open + close, "");
    }

    Ok(Meanings { cleaned })
}

/// Build the short display summary for a suggestion entry.
///
/// The summary starts as `<key> - <first meaning>`, truncated with an
/// ellipsis past 23 characters, and otherwise greedily extended with
/// further `; <meaning>` segments while it stays under that width.
pub fn summarize(key: &str, meanings: &Meanings) -> String {
    let mut it = meanings.iter();

    let mut entry = match it.next() {
        Some(first) => format!("{key} - {first}"),
        None => return key.to_owned(),
    };

    if entry.chars().count() > 23 {
        let mut truncated: String = entry.chars().take(23).collect();
        truncated.push_str("...");
        return truncated;
    }

    for meaning in it {
        if entry.chars().count() + meaning.chars().count() >= 23 {
            break;
        }

        entry.push_str("; ");
        entry.push_str(&meaning);
    }

    entry
}
