//! Prefix index powering predictive suggestions.

use std::cmp::Reverse;
use std::collections::{BTreeSet, HashMap};

use crate::lexicon::Lexicon;
use crate::meaning;

/// Page size of a suggestion window.
pub const PAGE_SIZE: usize = 52;

/// Candidate ordering key: longest first, ties broken lexicographically.
type Candidate = (Reverse<usize>, String);

/// A prefix-to-candidates index over every searchable field of a lexicon.
///
/// Built once, queried per keystroke. Every non-empty character prefix of
/// the kanji key, the kana reading, the romanized reading and each
/// normalized meaning maps to the set of dictionary forms it can complete
/// to.
#[derive(Debug, Default)]
pub struct PredictiveIndex {
    map: HashMap<String, BTreeSet<Candidate>>,
}

impl PredictiveIndex {
    /// Build the index from every entry of the lexicon.
    pub fn build(lexicon: &Lexicon) -> Self {
        let mut index = Self::default();

        for (key, record) in lexicon.iter() {
            index.insert(key, key);
            index.insert(&record.kana, key);
            index.insert(&record.romaji.to_lowercase(), key);

            match meaning::parse_meanings(&record.meaning) {
                Ok(meanings) => {
                    for meaning in meanings.iter() {
                        index.insert(&meaning, key);
                    }
                }
                Err(error) => {
                    tracing::warn!("`{key}`: meanings not indexed: {error}");
                }
            }
        }

        tracing::debug!("predictive index holds {} prefixes", index.map.len());
        index
    }

    fn insert(&mut self, text: &str, key: &str) {
        let chars = key.chars().count();

        for (at, c) in text.char_indices() {
            let prefix = &text[..at + c.len_utf8()];

            self.map
                .entry(prefix.to_owned())
                .or_default()
                .insert((Reverse(chars), key.to_owned()));
        }
    }

    /// Query with typed text, trimmed and lowercased before the exact
    /// lookup. Returns the full ordered candidate list; windowing is the
    /// caller's concern.
    pub fn query(&self, typed: &str) -> impl Iterator<Item = &str> + '_ {
        let typed = typed.trim().to_lowercase();

        self.map
            .get(&typed)
            .into_iter()
            .flatten()
            .map(|(_, key)| key.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::LexiconRow;

    fn taberu() -> LexiconRow {
        LexiconRow {
            kanji: "食べる".to_owned(),
            kana: "たべる".to_owned(),
            romaji: "taberu".to_owned(),
            meaning: "to eat".to_owned(),
            class: 2,
            transitivity: 5,
        }
    }

    fn kuu() -> LexiconRow {
        LexiconRow {
            kanji: "食う".to_owned(),
            kana: "くう".to_owned(),
            romaji: "kuu".to_owned(),
            meaning: "to eat (vulgar)".to_owned(),
            class: 1,
            transitivity: 5,
        }
    }

    fn query(index: &PredictiveIndex, typed: &str) -> Vec<String> {
        index.query(typed).map(str::to_owned).collect()
    }

    #[test]
    fn all_four_fields_are_indexed() {
        let index = PredictiveIndex::build(&Lexicon::from_rows([taberu()]));

        assert_eq!(query(&index, "食"), ["食べる"]);
        assert_eq!(query(&index, "食べ"), ["食べる"]);
        assert_eq!(query(&index, "たべ"), ["食べる"]);
        assert_eq!(query(&index, "tab"), ["食べる"]);
        assert_eq!(query(&index, "eat"), ["食べる"]);
        assert!(query(&index, "x").is_empty());
    }

    #[test]
    fn longer_candidates_order_first() {
        let index = PredictiveIndex::build(&Lexicon::from_rows([taberu(), kuu()]));

        assert_eq!(query(&index, "食"), ["食べる", "食う"]);
        assert_eq!(query(&index, "eat"), ["食べる", "食う"]);
    }

    #[test]
    fn equal_length_candidates_order_lexicographically() {
        let rows = [
            LexiconRow {
                kanji: "読む".to_owned(),
                kana: "よむ".to_owned(),
                romaji: "yomu".to_owned(),
                meaning: "to read".to_owned(),
                class: 1,
                transitivity: 5,
            },
            LexiconRow {
                kanji: "病む".to_owned(),
                kana: "やむ".to_owned(),
                romaji: "yamu".to_owned(),
                meaning: "to fall ill".to_owned(),
                class: 1,
                transitivity: 6,
            },
        ];

        let index = PredictiveIndex::build(&Lexicon::from_rows(rows));
        assert_eq!(query(&index, "y"), ["病む", "読む"]);
    }

    #[test]
    fn duplicate_meanings_yield_one_candidate() {
        let mut row = taberu();
        row.meaning = "to eat; to eat".to_owned();

        let index = PredictiveIndex::build(&Lexicon::from_rows([row]));
        assert_eq!(query(&index, "eat"), ["食べる"]);
    }

    #[test]
    fn typed_text_is_trimmed_and_lowercased() {
        let index = PredictiveIndex::build(&Lexicon::from_rows([taberu()]));

        assert_eq!(query(&index, "  EAT "), ["食べる"]);
        assert_eq!(query(&index, " TaB "), ["食べる"]);
    }

    #[test]
    fn broken_meanings_degrade_to_the_other_fields() {
        let mut row = taberu();
        row.meaning = "to eat (oops".to_owned();

        let index = PredictiveIndex::build(&Lexicon::from_rows([row]));

        assert_eq!(query(&index, "食"), ["食べる"]);
        assert_eq!(query(&index, "たべ"), ["食べる"]);
        assert_eq!(query(&index, "tab"), ["食べる"]);
        assert!(query(&index, "eat").is_empty());
    }
}
