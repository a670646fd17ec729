//! Hand-authored tables for the eight irregular verbs.
//!
//! Each row is a complete eighteen-entry table indexed in form order;
//! nothing here is derived. The reading column carries the per-form reading
//! prefix, which for 来る changes between き, こ and く.

use crate::inflection::NO_PASSIVE_FORM;

/// A fully authored irregular conjugation row.
pub(crate) struct Irregular {
    /// The dictionary form that selects this row.
    pub(crate) dictionary: &'static str,
    /// Kanji prefix shared by every form, empty for kana-only verbs.
    pub(crate) kanji: &'static str,
    /// Per-form reading of the kanji prefix.
    pub(crate) readings: [&'static str; 18],
    /// Per-form text following the kanji prefix.
    pub(crate) suffixes: [&'static str; 18],
}

pub(crate) static IRREGULARS: [Irregular; 8] = [
    Irregular {
        dictionary: "来る",
        kanji: "来",
        readings: [
            "き", "き", "き", "き", "く", "こ", "き", "こ", "き", "こ", "こ", "き", "く", "き",
            "こ", "こ", "こ", "こ",
        ],
        suffixes: [
            "ます",
            "ません",
            "ました",
            "ませんでした",
            "る",
            "ない",
            "た",
            "なかった",
            "て",
            "い",
            "よう",
            "ましょう",
            "れば",
            "たら",
            "られる",
            "られる",
            "させる",
            "させられる",
        ],
    },
    Irregular {
        dictionary: "行く",
        kanji: "行",
        readings: ["い"; 18],
        suffixes: [
            "きます",
            "きません",
            "きました",
            "きませんでした",
            "く",
            "かない",
            "った",
            "かなかった",
            "って",
            "け",
            "こう",
            "きましょう",
            "けば",
            "ったら",
            "ける",
            "かれる",
            "かせる",
            "かされる",
        ],
    },
    Irregular {
        dictionary: "なさる",
        kanji: "",
        readings: [""; 18],
        suffixes: [
            "なさいます",
            "なさいません",
            "なさいました",
            "なさいませんでした",
            "なさる",
            "なさらない",
            "なさった",
            "なさらなかった",
            "なさって",
            "なさい",
            "なさろう",
            "なさいましょう",
            "なされば",
            "なさったら",
            "なされる",
            "なさられる",
            "なさらせる",
            "なさらされる",
        ],
    },
    Irregular {
        dictionary: "くださる",
        kanji: "",
        readings: [""; 18],
        suffixes: [
            "くださいます",
            "くださいません",
            "くださいました",
            "くださいませんでした",
            "くださる",
            "くださらない",
            "くださった",
            "くださらなかった",
            "くださって",
            "ください",
            "くださろう",
            "くださいましょう",
            "くだされば",
            "くださったら",
            "くだされる",
            "くださられる",
            "くださらせる",
            "くださらされる",
        ],
    },
    Irregular {
        dictionary: "ある",
        kanji: "",
        readings: [""; 18],
        suffixes: [
            "あります",
            "ありません",
            "ありました",
            "ありませんでした",
            "ある",
            "ない",
            "あった",
            "なかった",
            "あって",
            "あれ",
            "あろう",
            "ありましょう",
            "あれば",
            "あったら",
            "ありえる",
            NO_PASSIVE_FORM,
            "あらせる",
            "あらせられる",
        ],
    },
    Irregular {
        dictionary: "ござる",
        kanji: "",
        readings: [""; 18],
        suffixes: [
            "ございます",
            "ございません",
            "ございました",
            "ございませんでした",
            "ござる",
            "ござらない",
            "ござった",
            "ござらなかった",
            "ござって",
            "ござれ",
            "ござろう",
            "ございましょう",
            "ござれば",
            "ござったら",
            "ござれる",
            NO_PASSIVE_FORM,
            "ござらせる",
            "ござらせられる",
        ],
    },
    Irregular {
        dictionary: "いらっしゃる",
        kanji: "",
        readings: [""; 18],
        suffixes: [
            "いらっしゃいます",
            "いらっしゃいません",
            "いらっしゃいました",
            "いらっしゃいませんでした",
            "いらっしゃる",
            "いらっしゃらない",
            "いらっしゃった",
            "いらっしゃらなかった",
            "いらっしゃって",
            "いらっしゃい",
            "いらっしゃろう",
            "いらっしゃいましょう",
            "いらっしゃれば",
            "いらっしゃったら",
            "いらっしゃれる",
            NO_PASSIVE_FORM,
            "いらっしゃらせる",
            "いらっしゃらせられる",
        ],
    },
    Irregular {
        dictionary: "おっしゃる",
        kanji: "",
        readings: [""; 18],
        suffixes: [
            "おっしゃいます",
            "おっしゃいません",
            "おっしゃいました",
            "おっしゃいませんでした",
            "おっしゃる",
            "おっしゃらない",
            "おっしゃった",
            "おっしゃらなかった",
            "おっしゃって",
            "おっしゃい",
            "おっしゃろう",
            "おっしゃいましょう",
            "おっしゃれば",
            "おっしゃったら",
            "おっしゃれる",
            "おっしゃられる",
            "おっしゃらせる",
            "おっしゃらされる",
        ],
    },
];

/// Look up the irregular row for a dictionary form.
pub(crate) fn lookup(dictionary_form: &str) -> Option<&'static Irregular> {
    IRREGULARS
        .iter()
        .find(|entry| entry.dictionary == dictionary_form)
}
