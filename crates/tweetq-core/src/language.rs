//! # Search Languages
//!
//! The [`Language`] enum lists every language the tweet-search endpoint
//! accepts in its `lang` parameter. Ordinal 0 is [`Language::Undefined`],
//! the "no language constraint" sentinel; the 217 defined languages follow
//! with ordinals 1 through 217, in table order.
//!
//! Codes are ISO 639-1 where one exists, followed by the regional variants and
//! ISO 639-3 codes the endpoint also recognizes.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValidationError;

macro_rules! languages {
    ($($variant:ident => $code:literal,)+) => {
        /// A search language.
        ///
        /// `Undefined` is the default and means the request carries no `lang`
        /// parameter. Discriminants are contiguous, so `language as u8` is the
        /// language ordinal.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
        #[repr(u8)]
        pub enum Language {
            /// No language constraint (code `und`).
            #[default]
            Undefined = 0,
            $(
                #[doc = concat!("Language code `", $code, "`.")]
                $variant,
            )+
        }

        impl Language {
            const DEFINED: &'static [Language] = &[$(Language::$variant,)+];

            /// The code sent in the `lang` request parameter.
            pub fn code(self) -> &'static str {
                match self {
                    Self::Undefined => "und",
                    $(Self::$variant => $code,)+
                }
            }
        }
    };
}

languages! {
    Afar => "aa",
    Abkhazian => "ab",
    Avestan => "ae",
    Afrikaans => "af",
    Akan => "ak",
    Amharic => "am",
    Aragonese => "an",
    Arabic => "ar",
    Assamese => "as",
    Avaric => "av",
    Aymara => "ay",
    Azerbaijani => "az",
    Bashkir => "ba",
    Belarusian => "be",
    Bulgarian => "bg",
    Bislama => "bi",
    Bambara => "bm",
    Bengali => "bn",
    Tibetan => "bo",
    Breton => "br",
    Bosnian => "bs",
    Catalan => "ca",
    Chechen => "ce",
    Chamorro => "ch",
    Corsican => "co",
    Cree => "cr",
    Czech => "cs",
    ChurchSlavic => "cu",
    Chuvash => "cv",
    Welsh => "cy",
    Danish => "da",
    German => "de",
    Divehi => "dv",
    Dzongkha => "dz",
    Ewe => "ee",
    Greek => "el",
    English => "en",
    Esperanto => "eo",
    Spanish => "es",
    Estonian => "et",
    Basque => "eu",
    Persian => "fa",
    Fulah => "ff",
    Finnish => "fi",
    Fijian => "fj",
    Faroese => "fo",
    French => "fr",
    WesternFrisian => "fy",
    Irish => "ga",
    ScottishGaelic => "gd",
    Galician => "gl",
    Guarani => "gn",
    Gujarati => "gu",
    Manx => "gv",
    Hausa => "ha",
    Hebrew => "he",
    Hindi => "hi",
    HiriMotu => "ho",
    Croatian => "hr",
    Haitian => "ht",
    Hungarian => "hu",
    Armenian => "hy",
    Herero => "hz",
    Interlingua => "ia",
    Indonesian => "id",
    Interlingue => "ie",
    Igbo => "ig",
    SichuanYi => "ii",
    Inupiaq => "ik",
    Ido => "io",
    Icelandic => "is",
    Italian => "it",
    Inuktitut => "iu",
    Japanese => "ja",
    Javanese => "jv",
    Georgian => "ka",
    Kongo => "kg",
    Kikuyu => "ki",
    Kuanyama => "kj",
    Kazakh => "kk",
    Kalaallisut => "kl",
    Khmer => "km",
    Kannada => "kn",
    Korean => "ko",
    Kanuri => "kr",
    Kashmiri => "ks",
    Kurdish => "ku",
    Komi => "kv",
    Cornish => "kw",
    Kyrgyz => "ky",
    Latin => "la",
    Luxembourgish => "lb",
    Ganda => "lg",
    Limburgish => "li",
    Lingala => "ln",
    Lao => "lo",
    Lithuanian => "lt",
    LubaKatanga => "lu",
    Latvian => "lv",
    Malagasy => "mg",
    Marshallese => "mh",
    Maori => "mi",
    Macedonian => "mk",
    Malayalam => "ml",
    Mongolian => "mn",
    Marathi => "mr",
    Malay => "ms",
    Maltese => "mt",
    Burmese => "my",
    Nauru => "na",
    NorwegianBokmal => "nb",
    NorthNdebele => "nd",
    Nepali => "ne",
    Ndonga => "ng",
    Dutch => "nl",
    NorwegianNynorsk => "nn",
    Norwegian => "no",
    SouthNdebele => "nr",
    Navajo => "nv",
    Chichewa => "ny",
    Occitan => "oc",
    Ojibwa => "oj",
    Oromo => "om",
    Oriya => "or",
    Ossetian => "os",
    Punjabi => "pa",
    Pali => "pi",
    Polish => "pl",
    Pashto => "ps",
    Portuguese => "pt",
    Quechua => "qu",
    Romansh => "rm",
    Rundi => "rn",
    Romanian => "ro",
    Russian => "ru",
    Kinyarwanda => "rw",
    Sanskrit => "sa",
    Sardinian => "sc",
    Sindhi => "sd",
    NorthernSami => "se",
    Sango => "sg",
    Sinhala => "si",
    Slovak => "sk",
    Slovenian => "sl",
    Samoan => "sm",
    Shona => "sn",
    Somali => "so",
    Albanian => "sq",
    Serbian => "sr",
    Swati => "ss",
    SouthernSotho => "st",
    Sundanese => "su",
    Swedish => "sv",
    Swahili => "sw",
    Tamil => "ta",
    Telugu => "te",
    Tajik => "tg",
    Thai => "th",
    Tigrinya => "ti",
    Turkmen => "tk",
    Tagalog => "tl",
    Tswana => "tn",
    Tonga => "to",
    Turkish => "tr",
    Tsonga => "ts",
    Tatar => "tt",
    Twi => "tw",
    Tahitian => "ty",
    Uyghur => "ug",
    Ukrainian => "uk",
    Urdu => "ur",
    Uzbek => "uz",
    Venda => "ve",
    Vietnamese => "vi",
    Volapuk => "vo",
    Walloon => "wa",
    Wolof => "wo",
    Xhosa => "xh",
    Yiddish => "yi",
    Yoruba => "yo",
    Zhuang => "za",
    Chinese => "zh",
    Zulu => "zu",
    ChineseSimplified => "zh-cn",
    ChineseTraditional => "zh-tw",
    EnglishUk => "en-gb",
    PortugueseBrazil => "pt-br",
    FrenchCanada => "fr-ca",
    SpanishLatinAmerica => "es-419",
    SerbianLatin => "sr-latn",
    Filipino => "fil",
    Hawaiian => "haw",
    CentralKurdish => "ckb",
    Cebuano => "ceb",
    Hmong => "hmn",
    Cantonese => "yue",
    Asturian => "ast",
    Cherokee => "chr",
    SwissGerman => "gsw",
    Santali => "sat",
    Manipuri => "mni",
    Dogri => "doi",
    Konkani => "kok",
    Maithili => "mai",
    Bodo => "brx",
    Sakha => "sah",
    Tetum => "tet",
    NorthernSotho => "nso",
    Syriac => "syr",
    LowerSorbian => "dsb",
    UpperSorbian => "hsb",
    Friulian => "fur",
    Ligurian => "lij",
    Sicilian => "scn",
    Neapolitan => "nap",
    Venetian => "vec",
    Lombard => "lmo",
}

impl Language {
    /// Number of defined languages (every variant except `Undefined`).
    pub const DEFINED_COUNT: usize = 217;

    /// All defined languages in ordinal order, excluding `Undefined`.
    pub fn defined() -> &'static [Language] {
        Self::DEFINED
    }

    /// The ordinal of this language; `Undefined` is 0.
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Look up a language by ordinal. Returns `None` above 217.
    pub fn from_ordinal(ordinal: u8) -> Option<Language> {
        match ordinal {
            0 => Some(Self::Undefined),
            n => Self::DEFINED.get(usize::from(n) - 1).copied(),
        }
    }

    /// Look up a language by request code, ignoring ASCII case and accepting
    /// `_` in place of `-` (`zh_CN` resolves to [`Language::ChineseSimplified`]).
    pub fn from_code(code: &str) -> Option<Language> {
        let normalized = code.trim().replace('_', "-");
        if normalized.eq_ignore_ascii_case(Self::Undefined.code()) {
            return Some(Self::Undefined);
        }
        Self::DEFINED
            .iter()
            .copied()
            .find(|lang| lang.code().eq_ignore_ascii_case(&normalized))
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| ValidationError::UnknownLanguage(s.to_string()))
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

/// Unknown or null codes deserialize to `Undefined` so that responses
/// tagged with codes introduced after this release still parse.
impl<'de> Deserialize<'de> for Language {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = Option::<String>::deserialize(deserializer)?;
        Ok(code
            .as_deref()
            .and_then(Self::from_code)
            .unwrap_or(Self::Undefined))
    }
}
