pub mod config;
pub use self::config::{Config, Language};

mod concat;
pub use self::concat::Concat;

mod dirs;
pub use self::dirs::Dirs;

pub mod dictionary;
pub use self::dictionary::{Dictionary, Entry, LookupError, Suggestion};

pub mod furigana;

pub mod inflection;
pub use self::inflection::{
    conjugate, ConjugateError, Conjugations, Form, OwnedConjugations, NO_PASSIVE_FORM,
};

pub mod kana;
pub use self::kana::{Fragments, Full, OwnedFull};

pub mod lexicon;
pub use self::lexicon::{Lexicon, LexiconError, LexiconRow, Transitivity, VerbClass, VerbRecord};

pub mod meaning;
pub use self::meaning::{parse_meanings, summarize, MeaningError, Meanings};

pub mod suggest;
pub use self::suggest::{PredictiveIndex, PAGE_SIZE};
