//! Verb inflection across the eighteen conjugated forms.

pub(crate) mod godan;
pub(crate) mod irregular;

pub use self::conjugate::{conjugate, ConjugateError};
mod conjugate;


use core::ops::Index;

use serde::{Deserialize, Serialize};

use crate::kana::{Fragments, Full, OwnedFull};

/// Placeholder text standing in for a suppressed passive form.
pub const NO_PASSIVE_FORM: &str = "No Passive Form";

macro_rules! form {
    ($vis:vis enum $name:ident { $({$variant:ident, $describe:literal, $label_ja:literal}),* $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[derive(Serialize, Deserialize)]
        #[serde(rename_all = "kebab-case")]
        #[repr(u8)]
        $vis enum $name {
            $($variant,)*
        }

        impl $name {
            /// Every form, in display order. The order is significant and
            /// doubles as the index into a conjugation table.
            $vis const ALL: [$name; 18] = [
                $($name::$variant,)*
            ];

            /// English name of the form.
            $vis fn describe(&self) -> &'static str {
                match self {
                    $($name::$variant => $describe,)*
                }
            }

            /// Japanese name of the form.
            $vis fn label_ja(&self) -> &'static str {
                match self {
                    $($name::$variant => $label_ja,)*
                }
            }
        }
    }
}

form! {
    pub enum Form {
        {PoliteNonPast, "Polite Non-Past", "丁寧形"},
        {PoliteNegative, "Polite Negative", "丁寧否定形"},
        {PolitePast, "Polite Past", "丁寧過去形"},
        {PoliteNegativePast, "Polite Negative Past", "丁寧過去否定形"},
        {Plain, "Plain", "辞書形"},
        {PlainNegative, "Plain Negative", "否定形"},
        {PlainPast, "Plain Past", "過去形"},
        {PlainNegativePast, "Plain Negative Past", "過去否定形"},
        {Te, "Te", "て形"},
        {Imperative, "Imperative", "命令形"},
        {PlainVolitional, "Plain Volitional", "意向形"},
        {PoliteVolitional, "Polite Volitional", "丁寧意向形"},
        {Hypothetical, "Hypothetical", "仮定形"},
        {Conditional, "Conditional", "条件形"},
        {Potential, "Potential", "可能形"},
        {Passive, "Passive", "受身形"},
        {Causative, "Causative", "使役形"},
        {CausativePassive, "Causative Passive", "使役受身形"},
    }
}

/// The conjugated forms of a single verb, in fixed display order.
#[borrowme::borrowme]
pub struct Conjugations<'a> {
    /// The dictionary form the conjugations were derived from.
    pub dictionary: Full<'a>,
    #[borrowme(owned = Vec<OwnedFull>, with = self::forms)]
    forms: [Fragments<'a>; 18],
}

impl<'a> Conjugations<'a> {
    pub(crate) fn new(dictionary: Full<'a>) -> Self {
        Self {
            dictionary,
            forms: core::array::from_fn(|_| Fragments::default()),
        }
    }

    pub(crate) fn set(&mut self, form: Form, fragments: Fragments<'a>) {
        self.forms[form as usize] = fragments;
    }

    /// Get the fragments of the given form.
    pub fn get(&self, form: Form) -> &Fragments<'a> {
        &self.forms[form as usize]
    }

    /// Iterate over all forms in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Form, &Fragments<'a>)> + '_ {
        Form::ALL.iter().map(move |&form| (form, self.get(form)))
    }
}

impl<'a> Index<Form> for Conjugations<'a> {
    type Output = Fragments<'a>;

    #[inline]
    fn index(&self, form: Form) -> &Self::Output {
        &self.forms[form as usize]
    }
}

impl OwnedConjugations {
    /// Get the text/reading pair of the given form.
    pub fn get(&self, form: Form) -> Option<&OwnedFull> {
        self.forms.get(form as usize)
    }

    /// Iterate over all forms in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Form, &OwnedFull)> + '_ {
        Form::ALL.iter().copied().zip(self.forms.iter())
    }
}

mod forms {
    use crate::kana::{Fragments, OwnedFull};

    pub(crate) fn to_owned(this: &[Fragments<'_>; 18]) -> Vec<OwnedFull> {
        this.iter().map(Fragments::to_full).collect()
    }

    pub(crate) fn borrow(this: &[OwnedFull]) -> [Fragments<'_>; 18] {
        core::array::from_fn(|at| match this.get(at) {
            Some(full) => Fragments::new([full.text.as_str()], [full.reading.as_str()], []),
            None => Fragments::default(),
        })
    }
}
