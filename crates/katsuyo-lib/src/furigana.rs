//! Transfer of kana readings onto conjugated text.
//!
//! A dictionary form is expected to be shaped as a kanji prefix followed by
//! a kana tail. The reading covers the whole form, so the slice of it that
//! covers the kanji prefix can be carried over verbatim to any conjugated
//! form, with the conjugated kana tail following it.

use crate::kana;

/// Split a dictionary form into its kanji prefix and kana tail.
///
/// Returns `None` when kana and kanji interleave, a shape the reading
/// transfer rule cannot represent.
pub fn split_script(text: &str) -> Option<(&str, &str)> {
    let mut boundary = None;

    for (at, c) in text.char_indices() {
        if kana::is_kana(c) {
            if boundary.is_none() {
                boundary = Some(at);
            }
        } else if boundary.is_some() {
            return None;
        }
    }

    Some(match boundary {
        Some(at) => text.split_at(at),
        None => (text, ""),
    })
}

/// Compute the reading fragments for a conjugation stem.
///
/// Returns the slice of the reading which covers the kanji prefix, and the
/// stem's own kana following it. The reading must end with the dictionary
/// form's kana tail.
pub fn reading_parts<'a>(
    dictionary_form: &'a str,
    stem: &'a str,
    reading: &'a str,
) -> Option<(&'a str, &'a str)> {
    let (kanji, kana_tail) = split_script(dictionary_form)?;

    if !reading.ends_with(kana_tail) {
        return None;
    }

    let prefix = &reading[..reading.len() - kana_tail.len()];
    let stem_kana = stem.get(kanji.len()..)?;
    Some((prefix, stem_kana))
}

/// Derive the reading of a conjugated form from the dictionary form and its
/// reading.
pub fn transfer(dictionary_form: &str, reading: &str, conjugated: &str) -> Option<String> {
    let (kanji, kana_tail) = split_script(dictionary_form)?;

    if !reading.ends_with(kana_tail) {
        return None;
    }

    let prefix = &reading[..reading.len() - kana_tail.len()];
    let kanji_chars = kanji.chars().count();

    let mut out = String::from(prefix);
    out.extend(conjugated.chars().skip(kanji_chars));
    Some(out)
}
