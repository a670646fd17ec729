//! Verb conjugation, dispatched on a record's verb class.

use thiserror::Error;

use crate::furigana;
use crate::inflection::{godan, irregular};
use crate::inflection::{Conjugations, Form, NO_PASSIVE_FORM};
use crate::kana::{Fragments, Full};
use crate::lexicon::{Transitivity, VerbClass, VerbRecord};

use Form::*;

/// An error raised when a record cannot be conjugated.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConjugateError {
    /// The dictionary form's ending is inconsistent with the record's class.
    #[error("`{text}` is not a valid {class} dictionary form")]
    InvalidVerbForm { text: String, class: VerbClass },
    /// An irregular record whose dictionary form is not a known irregular
    /// verb.
    #[error("`{text}` is not a known irregular verb")]
    UnknownIrregular { text: String },
    /// The kana reading cannot be aligned with the dictionary form.
    #[error("`{text}`: reading `{reading}` does not cover the kana tail")]
    ReadingMismatch { text: String, reading: String },
}

/// Ichidan suffixes, in form order.
static ICHIDAN: [&str; 18] = [
    "ます",
    "ません",
    "ました",
    "ませんでした",
    "る",
    "ない",
    "た",
    "なかった",
    "て",
    "ろ",
    "よう",
    "ましょう",
    "れば",
    "たら",
    "られる",
    "られる",
    "させる",
    "させられる",
];

/// Suru compound suffixes, in form order.
static SURU: [&str; 18] = [
    "します",
    "しません",
    "しました",
    "しませんでした",
    "する",
    "しない",
    "した",
    "しなかった",
    "して",
    "しろ",
    "しよう",
    "しましょう",
    "すれば",
    "したら",
    "できる",
    "される",
    "させる",
    "させられる",
];

/// Conjugate the given record into its eighteen forms.
///
/// The record's class decides the algorithm; the dictionary form must carry
/// an ending consistent with that class.
pub fn conjugate<'a>(
    record: &'a VerbRecord,
    dictionary_form: &'a str,
) -> Result<Conjugations<'a>, ConjugateError> {
    match record.class {
        VerbClass::Godan => godan_forms(record, dictionary_form),
        VerbClass::Ichidan => ichidan_forms(record, dictionary_form),
        VerbClass::Irregular => irregular_forms(record, dictionary_form),
        VerbClass::SuruCompound => suru_forms(record, dictionary_form),
    }
}

fn invalid(text: &str, class: VerbClass) -> ConjugateError {
    ConjugateError::InvalidVerbForm {
        text: text.to_owned(),
        class,
    }
}

fn reading_parts<'a>(
    record: &'a VerbRecord,
    text: &'a str,
    stem: &'a str,
) -> Result<(&'a str, &'a str), ConjugateError> {
    furigana::reading_parts(text, stem, &record.kana).ok_or_else(|| {
        ConjugateError::ReadingMismatch {
            text: text.to_owned(),
            reading: record.kana.clone(),
        }
    })
}

fn no_passive() -> Fragments<'static> {
    Fragments::new([NO_PASSIVE_FORM], [], [])
}

/// Suppress the passive form of an intransitive record.
fn passive<'a>(record: &VerbRecord, fragments: Fragments<'a>) -> Fragments<'a> {
    if record.transitivity == Transitivity::Intransitive {
        no_passive()
    } else {
        fragments
    }
}

fn godan_forms<'a>(
    record: &'a VerbRecord,
    text: &'a str,
) -> Result<Conjugations<'a>, ConjugateError> {
    let mut it = text.chars();

    let Some(ending) = it.next_back() else {
        return Err(invalid(text, VerbClass::Godan));
    };

    let stem = it.as_str();

    let Some(g) = godan::table(ending) else {
        return Err(invalid(text, VerbClass::Godan));
    };

    let (prefix, stem_kana) = reading_parts(record, text, stem)?;
    let word = |suffix: &[&'a str]| {
        Fragments::new([stem], [prefix, stem_kana], suffix.iter().copied())
    };

    let mut out = Conjugations::new(Full::new(text, &record.kana));
    out.set(PoliteNonPast, word(&[g.i, "ます"]));
    out.set(PoliteNegative, word(&[g.i, "ません"]));
    out.set(PolitePast, word(&[g.i, "ました"]));
    out.set(PoliteNegativePast, word(&[g.i, "ませんでした"]));
    out.set(Plain, word(&[g.u]));
    out.set(PlainNegative, word(&[g.a, "ない"]));
    out.set(PlainPast, word(&[g.past]));
    out.set(PlainNegativePast, word(&[g.a, "なかった"]));
    out.set(Te, word(&[g.te]));
    out.set(Imperative, word(&[g.e]));
    out.set(PlainVolitional, word(&[g.o, "う"]));
    out.set(PoliteVolitional, word(&[g.i, "ましょう"]));
    out.set(Hypothetical, word(&[g.e, "ば"]));
    out.set(Conditional, word(&[g.past, "ら"]));
    out.set(Potential, word(&[g.e, "る"]));
    out.set(Passive, passive(record, word(&[g.a, "れる"])));
    out.set(Causative, word(&[g.a, "せる"]));
    out.set(CausativePassive, word(&[g.a, g.causative_passive]));
    Ok(out)
}

fn ichidan_forms<'a>(
    record: &'a VerbRecord,
    text: &'a str,
) -> Result<Conjugations<'a>, ConjugateError> {
    let Some(stem) = text.strip_suffix('る') else {
        return Err(invalid(text, VerbClass::Ichidan));
    };

    let (prefix, stem_kana) = reading_parts(record, text, stem)?;

    let mut out = Conjugations::new(Full::new(text, &record.kana));

    for (form, suffix) in Form::ALL.into_iter().zip(ICHIDAN) {
        out.set(form, Fragments::new([stem], [prefix, stem_kana], [suffix]));
    }

    out.set(
        Passive,
        passive(
            record,
            Fragments::new([stem], [prefix, stem_kana], ["られる"]),
        ),
    );

    Ok(out)
}

fn suru_forms<'a>(
    record: &'a VerbRecord,
    text: &'a str,
) -> Result<Conjugations<'a>, ConjugateError> {
    let Some(stem) = text.strip_suffix("する") else {
        return Err(invalid(text, VerbClass::SuruCompound));
    };

    let (prefix, stem_kana) = reading_parts(record, text, stem)?;

    let mut out = Conjugations::new(Full::new(text, &record.kana));

    for (form, suffix) in Form::ALL.into_iter().zip(SURU) {
        out.set(form, Fragments::new([stem], [prefix, stem_kana], [suffix]));
    }

    Ok(out)
}

fn irregular_forms<'a>(
    record: &'a VerbRecord,
    text: &'a str,
) -> Result<Conjugations<'a>, ConjugateError> {
    let Some(entry) = irregular::lookup(text) else {
        return Err(ConjugateError::UnknownIrregular {
            text: text.to_owned(),
        });
    };

    let mut out = Conjugations::new(Full::new(text, &record.kana));

    for ((form, suffix), reading) in Form::ALL
        .into_iter()
        .zip(entry.suffixes)
        .zip(entry.readings)
    {
        if suffix == NO_PASSIVE_FORM {
            out.set(form, no_passive());
        } else {
            out.set(form, Fragments::new([entry.kanji], [reading], [suffix]));
        }
    }

    Ok(out)
}
