//! The verb lexicon: dictionary-form keys mapped to verb records.

use core::fmt;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::furigana;
use crate::inflection::{godan, irregular, Form};
use crate::kana;

/// The structural conjugation class of a verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VerbClass {
    Godan,
    Ichidan,
    Irregular,
    SuruCompound,
}

impl VerbClass {
    /// Decode from the numeric class code used by serialized lexicons.
    pub fn from_code(code: u8) -> Option<Self> {
        Some(match code {
            1 => VerbClass::Godan,
            2 => VerbClass::Ichidan,
            3 => VerbClass::Irregular,
            4 => VerbClass::SuruCompound,
            _ => return None,
        })
    }

    /// The numeric class code used by serialized lexicons.
    pub fn code(&self) -> u8 {
        match self {
            VerbClass::Godan => 1,
            VerbClass::Ichidan => 2,
            VerbClass::Irregular => 3,
            VerbClass::SuruCompound => 4,
        }
    }

    /// English name of the class.
    pub fn name(&self) -> &'static str {
        match self {
            VerbClass::Godan => "Godan",
            VerbClass::Ichidan => "Ichidan",
            VerbClass::Irregular => "Irregular",
            VerbClass::SuruCompound => "Suru",
        }
    }

    /// Japanese name of the class.
    pub fn name_ja(&self) -> &'static str {
        match self {
            VerbClass::Godan => "五段",
            VerbClass::Ichidan => "一段",
            VerbClass::Irregular => "不規則",
            VerbClass::SuruCompound => "する動詞",
        }
    }
}

impl fmt::Display for VerbClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether a verb takes a direct object, gating the passive form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Transitivity {
    Transitive,
    Intransitive,
    NotApplicable,
}

impl Transitivity {
    /// Decode from the numeric transitivity code used by serialized
    /// lexicons.
    pub fn from_code(code: u8) -> Option<Self> {
        Some(match code {
            5 => Transitivity::Transitive,
            6 => Transitivity::Intransitive,
            7 => Transitivity::NotApplicable,
            _ => return None,
        })
    }

    /// The numeric transitivity code used by serialized lexicons.
    pub fn code(&self) -> u8 {
        match self {
            Transitivity::Transitive => 5,
            Transitivity::Intransitive => 6,
            Transitivity::NotApplicable => 7,
        }
    }

    /// English name of the transitivity.
    pub fn name(&self) -> &'static str {
        match self {
            Transitivity::Transitive => "Transitive",
            Transitivity::Intransitive => "Intransitive",
            Transitivity::NotApplicable => "No Transitivity",
        }
    }

    /// Japanese name of the transitivity.
    pub fn name_ja(&self) -> &'static str {
        match self {
            Transitivity::Transitive => "他動詞",
            Transitivity::Intransitive => "自動詞",
            Transitivity::NotApplicable => "自他なし",
        }
    }
}

impl fmt::Display for Transitivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single lexicon entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerbRecord {
    pub class: VerbClass,
    pub transitivity: Transitivity,
    /// Full kana rendering of the dictionary form.
    pub kana: String,
    /// Romanized reading, display only.
    pub romaji: String,
    /// Raw English gloss, unnormalized.
    pub meaning: String,
}

/// A row of the serialized lexicon table. Class and transitivity travel as
/// their numeric codes and round-trip exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconRow {
    pub kanji: String,
    pub kana: String,
    pub romaji: String,
    pub meaning: String,
    pub class: u8,
    pub transitivity: u8,
}

/// An error raised when a lexicon entry fails validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LexiconError {
    /// A class code outside the closed enumeration.
    #[error("`{key}`: unknown verb class code {code}")]
    UnknownClass { key: String, code: u8 },
    /// A transitivity code outside the closed enumeration.
    #[error("`{key}`: unknown transitivity code {code}")]
    UnknownTransitivity { key: String, code: u8 },
    /// The dictionary form's ending does not fit the declared class, or an
    /// irregular entry is not one of the known irregular verbs.
    #[error("`{key}` is not a valid {class} dictionary form")]
    ClassMismatch { key: String, class: VerbClass },
    /// The kana reading cannot be aligned with the dictionary form, so
    /// readings of conjugated forms could not be derived from it.
    #[error("`{key}`: reading `{reading}` does not align with the dictionary form")]
    ReadingMismatch { key: String, reading: String },
}

/// An immutable mapping from dictionary form to verb record.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Lexicon {
    entries: BTreeMap<String, VerbRecord>,
}

impl Lexicon {
    /// Build a lexicon from serialized rows. Rows that fail validation are
    /// logged and skipped; the remaining rows still load.
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = LexiconRow>,
    {
        let mut lexicon = Self::default();
        let mut skipped = 0usize;

        for row in rows {
            if let Err(error) = lexicon.insert_row(row) {
                tracing::warn!("skipping lexicon row: {error}");
                skipped += 1;
            }
        }

        if skipped > 0 {
            tracing::warn!("{skipped} lexicon row(s) skipped");
        }

        lexicon
    }

    /// Decode and insert a single row.
    pub fn insert_row(&mut self, row: LexiconRow) -> Result<(), LexiconError> {
        let Some(class) = VerbClass::from_code(row.class) else {
            return Err(LexiconError::UnknownClass {
                key: row.kanji,
                code: row.class,
            });
        };

        let Some(transitivity) = Transitivity::from_code(row.transitivity) else {
            return Err(LexiconError::UnknownTransitivity {
                key: row.kanji,
                code: row.transitivity,
            });
        };

        self.insert(
            row.kanji,
            VerbRecord {
                class,
                transitivity,
                kana: row.kana,
                romaji: row.romaji.to_lowercase(),
                meaning: row.meaning,
            },
        )
    }

    /// Validate and insert a single record. The first record for a key
    /// wins.
    pub fn insert(&mut self, key: String, record: VerbRecord) -> Result<(), LexiconError> {
        validate(&key, &record)?;
        self.entries.entry(key).or_insert(record);
        Ok(())
    }

    /// Get the record for a dictionary form.
    pub fn get(&self, key: &str) -> Option<&VerbRecord> {
        self.entries.get(key)
    }

    /// Get the stored key and record for a dictionary form.
    pub fn entry(&self, key: &str) -> Option<(&str, &VerbRecord)> {
        self.entries
            .get_key_value(key)
            .map(|(key, record)| (key.as_str(), record))
    }

    /// Test if the lexicon holds the given dictionary form.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterate over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &VerbRecord)> + '_ {
        self.entries
            .iter()
            .map(|(key, record)| (key.as_str(), record))
    }

    /// Serialized rows for every entry, in key order.
    pub fn rows(&self) -> impl Iterator<Item = LexiconRow> + '_ {
        self.iter().map(|(key, record)| LexiconRow {
            kanji: key.to_owned(),
            kana: record.kana.clone(),
            romaji: record.romaji.clone(),
            meaning: record.meaning.clone(),
            class: record.class.code(),
            transitivity: record.transitivity.code(),
        })
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Test if the lexicon is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn validate(key: &str, record: &VerbRecord) -> Result<(), LexiconError> {
    let mismatch = || LexiconError::ClassMismatch {
        key: key.to_owned(),
        class: record.class,
    };

    let bad_reading = || LexiconError::ReadingMismatch {
        key: key.to_owned(),
        reading: record.kana.clone(),
    };

    if !record.kana.chars().all(kana::is_kana) || record.kana.is_empty() {
        return Err(bad_reading());
    }

    match record.class {
        VerbClass::Godan => {
            if !key.chars().next_back().is_some_and(godan::is_ending) {
                return Err(mismatch());
            }
        }
        VerbClass::Ichidan => {
            if !key.ends_with('る') || key.chars().count() < 2 {
                return Err(mismatch());
            }
        }
        VerbClass::SuruCompound => {
            if !key.ends_with("する") {
                return Err(mismatch());
            }
        }
        VerbClass::Irregular => {
            let Some(entry) = irregular::lookup(key) else {
                return Err(mismatch());
            };

            let plain = Form::Plain as usize;
            let expected = format!("{}{}", entry.readings[plain], entry.suffixes[plain]);

            if record.kana != expected {
                return Err(bad_reading());
            }

            return Ok(());
        }
    }

    let Some((_, kana_tail)) = furigana::split_script(key) else {
        return Err(bad_reading());
    };

    if !record.kana.ends_with(kana_tail) {
        return Err(bad_reading());
    }

    Ok(())
}
