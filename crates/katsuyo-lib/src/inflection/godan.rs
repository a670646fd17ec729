//! Per-ending godan suffix tables.

/// The suffix table for a single godan dictionary ending.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Godan {
    /// The dictionary ending itself (u-row).
    pub(crate) u: &'static str,
    /// a-row replacement, used by the negative family.
    pub(crate) a: &'static str,
    /// i-row replacement, used by the polite family.
    pub(crate) i: &'static str,
    /// e-row replacement, used by imperative, hypothetical and potential.
    pub(crate) e: &'static str,
    /// o-row replacement, used by the plain volitional.
    pub(crate) o: &'static str,
    /// Plain past suffix, voicing applied.
    pub(crate) past: &'static str,
    /// Te-form suffix.
    pub(crate) te: &'static str,
    /// Causative-passive tail, appended after the a-row kana.
    pub(crate) causative_passive: &'static str,
}

/// The U table.
static U: &Godan = &Godan {
    u: "う",
    a: "わ",
    i: "い",
    e: "え",
    o: "お",
    past: "った",
    te: "って",
    causative_passive: "される",
};

/// The KU table.
static KU: &Godan = &Godan {
    u: "く",
    a: "か",
    i: "き",
    e: "け",
    o: "こ",
    past: "いた",
    te: "いて",
    causative_passive: "される",
};

/// The GU table.
static GU: &Godan = &Godan {
    u: "ぐ",
    a: "が",
    i: "ぎ",
    e: "げ",
    o: "ご",
    past: "いだ",
    te: "いて",
    causative_passive: "される",
};

/// The SU table.
static SU: &Godan = &Godan {
    u: "す",
    a: "さ",
    i: "し",
    e: "せ",
    o: "そ",
    past: "した",
    te: "して",
    causative_passive: "せられる",
};

/// The TSU table.
static TSU: &Godan = &Godan {
    u: "つ",
    a: "た",
    i: "ち",
    e: "て",
    o: "と",
    past: "った",
    te: "って",
    causative_passive: "される",
};

/// The NU table.
static NU: &Godan = &Godan {
    u: "ぬ",
    a: "な",
    i: "に",
    e: "ね",
    o: "の",
    past: "んだ",
    te: "んで",
    causative_passive: "される",
};

/// The BU table.
static BU: &Godan = &Godan {
    u: "ぶ",
    a: "ば",
    i: "び",
    e: "べ",
    o: "ぼ",
    past: "んだ",
    te: "んで",
    causative_passive: "される",
};

/// The MU table.
static MU: &Godan = &Godan {
    u: "む",
    a: "ま",
    i: "み",
    e: "め",
    o: "も",
    past: "んだ",
    te: "んで",
    causative_passive: "される",
};

/// The RU table.
static RU: &Godan = &Godan {
    u: "る",
    a: "ら",
    i: "り",
    e: "れ",
    o: "ろ",
    past: "った",
    te: "って",
    causative_passive: "される",
};

/// Look up the suffix table for a godan dictionary ending.
pub(crate) fn table(ending: char) -> Option<&'static Godan> {
    Some(match ending {
        'う' => U,
        'く' => KU,
        'ぐ' => GU,
        'す' => SU,
        'つ' => TSU,
        'ぬ' => NU,
        'ぶ' => BU,
        'む' => MU,
        'る' => RU,
        _ => return None,
    })
}

/// Test if the character is one of the nine godan dictionary endings.
pub(crate) fn is_ending(c: char) -> bool {
    table(c).is_some()
}
