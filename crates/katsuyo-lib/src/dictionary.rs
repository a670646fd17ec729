//! The query boundary joining the lexicon, the predictive index and the
//! exact meaning map.

use std::collections::{BTreeSet, HashMap};

use thiserror::Error;

use crate::inflection::{self, ConjugateError, Conjugations};
use crate::lexicon::{Lexicon, VerbRecord};
use crate::meaning::{self, MeaningError};
use crate::suggest::{PredictiveIndex, PAGE_SIZE};

/// An error raised while resolving a query.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The input does not resolve to any lexicon key.
    #[error("`{input}` was not found in the dictionary")]
    NotFound { input: String },
    /// The input resolves to more than one lexicon key.
    #[error("`{input}` resolves to more than one verb")]
    Ambiguous {
        input: String,
        candidates: Vec<String>,
    },
    #[error(transparent)]
    Meaning(#[from] MeaningError),
    #[error(transparent)]
    Conjugate(#[from] ConjugateError),
}

/// A resolved dictionary entry with its conjugated forms.
pub struct Entry<'a> {
    pub key: &'a str,
    pub record: &'a VerbRecord,
    pub conjugations: Conjugations<'a>,
}

/// A suggestion row: the lexicon key plus its display summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub key: String,
    pub summary: String,
}

/// Read-side dictionary built once from a lexicon.
pub struct Dictionary {
    lexicon: Lexicon,
    index: PredictiveIndex,
    meanings: HashMap<String, BTreeSet<String>>,
}

impl Dictionary {
    /// Build the dictionary, its predictive index and its exact meaning
    /// map.
    pub fn new(lexicon: Lexicon) -> Self {
        let index = PredictiveIndex::build(&lexicon);
        let mut meanings: HashMap<String, BTreeSet<String>> = HashMap::new();

        for (key, record) in lexicon.iter() {
            let Ok(parsed) = meaning::parse_meanings(&record.meaning) else {
                continue;
            };

            for meaning in parsed.iter() {
                meanings.entry(meaning).or_default().insert(key.to_owned());
            }
        }

        Self {
            lexicon,
            index,
            meanings,
        }
    }

    /// The underlying lexicon.
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Resolve typed input to a single entry and conjugate it.
    ///
    /// Input starting with an ASCII letter is treated as an English query
    /// and resolved through the meaning map; anything else is looked up as
    /// a dictionary-form key directly.
    pub fn conjugate(&self, input: &str) -> Result<Entry<'_>, LookupError> {
        let typed = input.trim();

        let not_found = || LookupError::NotFound {
            input: input.trim().to_owned(),
        };

        let Some(first) = typed.chars().next() else {
            return Err(not_found());
        };

        let resolved = if first.is_ascii_alphabetic() {
            self.resolve_meaning(typed)?
        } else {
            typed
        };

        let (key, record) = self.lexicon.entry(resolved).ok_or_else(not_found)?;
        let conjugations = inflection::conjugate(record, key)?;

        Ok(Entry {
            key,
            record,
            conjugations,
        })
    }

    /// Resolve an English query to a unique dictionary-form key.
    fn resolve_meaning(&self, typed: &str) -> Result<&str, LookupError> {
        let parsed = meaning::parse_meanings(typed)?;
        let mut it = parsed.iter();

        let Some(single) = it.next() else {
            return Err(LookupError::NotFound {
                input: typed.to_owned(),
            });
        };

        if it.next().is_some() {
            return Err(LookupError::Ambiguous {
                input: typed.to_owned(),
                candidates: Vec::new(),
            });
        }

        let Some(keys) = self.meanings.get(&single) else {
            return Err(LookupError::NotFound {
                input: typed.to_owned(),
            });
        };

        let mut keys_it = keys.iter();

        match (keys_it.next(), keys_it.next()) {
            (Some(key), None) => Ok(key.as_str()),
            (Some(..), Some(..)) => Err(LookupError::Ambiguous {
                input: typed.to_owned(),
                candidates: keys.iter().cloned().collect(),
            }),
            (None, ..) => Err(LookupError::NotFound {
                input: typed.to_owned(),
            }),
        }
    }

    /// Suggestions for the typed text, windowed by the scroll offset. At
    /// most [`PAGE_SIZE`] rows are returned.
    pub fn suggest(&self, typed: &str, offset: usize) -> Vec<Suggestion> {
        self.index
            .query(typed)
            .skip(offset)
            .take(PAGE_SIZE)
            .map(|key| {
                let summary = match self.lexicon.get(key) {
                    Some(record) => match meaning::parse_meanings(&record.meaning) {
                        Ok(meanings) => meaning::summarize(key, &meanings),
                        Err(..) => key.to_owned(),
                    },
                    None => key.to_owned(),
                };

                Suggestion {
                    key: key.to_owned(),
                    summary,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::LexiconRow;

    fn row(kanji: &str, kana: &str, romaji: &str, meaning: &str, class: u8) -> LexiconRow {
        LexiconRow {
            kanji: kanji.to_owned(),
            kana: kana.to_owned(),
            romaji: romaji.to_owned(),
            meaning: meaning.to_owned(),
            class,
            transitivity: 5,
        }
    }

    fn dictionary() -> Dictionary {
        Dictionary::new(Lexicon::from_rows([
            row("食べる", "たべる", "taberu", "to eat (casual); to dine", 2),
            row("食う", "くう", "kuu", "to eat (vulgar)", 1),
            row("飲む", "のむ", "nomu", "to drink", 1),
        ]))
    }

    #[test]
    fn conjugates_by_dictionary_form() {
        let dictionary = dictionary();
        let entry = dictionary.conjugate("食べる").expect("entry");

        assert_eq!(entry.key, "食べる");
        assert_eq!(
            entry.conjugations[crate::Form::PoliteNonPast].text(),
            "食べます"
        );
    }

    #[test]
    fn resolves_a_unique_english_meaning() {
        let dictionary = dictionary();
        let entry = dictionary.conjugate("drink").expect("entry");
        assert_eq!(entry.key, "飲む");
    }

    #[test]
    fn missing_and_ambiguous_are_distinct() {
        let dictionary = dictionary();

        assert!(matches!(
            dictionary.conjugate("zzz"),
            Err(LookupError::NotFound { .. })
        ));

        let ambiguous = dictionary.conjugate("eat");
        let Err(LookupError::Ambiguous { candidates, .. }) = ambiguous else {
            panic!("expected an ambiguous lookup");
        };
        assert_eq!(candidates, ["食う", "食べる"]);
    }

    #[test]
    fn empty_input_is_a_miss() {
        let dictionary = dictionary();

        assert!(matches!(
            dictionary.conjugate("   "),
            Err(LookupError::NotFound { .. })
        ));
    }

    #[test]
    fn multi_meaning_input_is_ambiguous() {
        let dictionary = dictionary();

        assert!(matches!(
            dictionary.conjugate("eat; drink"),
            Err(LookupError::Ambiguous { .. })
        ));
    }

    #[test]
    fn parenthetical_errors_propagate() {
        let dictionary = dictionary();

        assert!(matches!(
            dictionary.conjugate("eat (oops"),
            Err(LookupError::Meaning(
                MeaningError::UnbalancedParenthetical { .. }
            ))
        ));
    }

    #[test]
    fn suggestions_carry_summaries() {
        let dictionary = dictionary();
        let suggestions = dictionary.suggest("飲", 0);

        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].key, "飲む");
        assert_eq!(suggestions[0].summary, "飲む - drink");
    }

    #[test]
    fn suggestion_window_slides_over_large_result_sets() {
        let vowels = [
            "あ", "い", "う", "え", "お", "か", "き", "く", "け", "こ",
        ];
        let mut rows = Vec::new();

        for a in vowels {
            for b in vowels {
                rows.push(row(
                    &format!("ま{a}{b}う"),
                    &format!("ま{a}{b}う"),
                    "mau",
                    "to whirl",
                    1,
                ));
            }
        }

        let dictionary = Dictionary::new(Lexicon::from_rows(rows));

        let first = dictionary.suggest("ま", 0);
        assert_eq!(first.len(), PAGE_SIZE);

        let rest = dictionary.suggest("ま", 60);
        assert_eq!(rest.len(), 40);

        assert_eq!(dictionary.suggest("ま", 100).len(), 0);
    }
}
