//! Embedded demo word list
//!
//! A small curated dictionary compiled into the binary, so the solver works
//! out of the box without a word-list file. Stored lowercase; the filter
//! normalizes case.

/// Demo dictionary (92 words, several pangrams)
pub const DEMO_WORDS: &[&str] = &[
    "aerobic",
    "amalgam",
    "ample",
    "apple",
    "apricot",
    "attic",
    "attire",
    "auction",
    "bacteria",
    "cabaret",
    "cacao",
    "cacciatore",
    "caption",
    "carton",
    "cater",
    "cite",
    "core",
    "count",
    "crate",
    "cream",
    "eagle",
    "erotica",
    "exact",
    "exam",
    "example",
    "gaggle",
    "gala",
    "game",
    "gape",
    "glam",
    "grate",
    "great",
    "heart",
    "heat",
    "iota",
    "irate",
    "lame",
    "lemon",
    "limit",
    "mango",
    "maple",
    "meal",
    "media",
    "megaplex",
    "metal",
    "mile",
    "noble",
    "note",
    "ocean",
    "otter",
    "pace",
    "page",
    "palm",
    "panic",
    "peace",
    "pear",
    "picture",
    "place",
    "plate",
    "poem",
    "poet",
    "point",
    "price",
    "pride",
    "race",
    "ratio",
    "react",
    "recite",
    "riot",
    "rotate",
    "table",
    "tacit",
    "taco",
    "tact",
    "tailor",
    "tame",
    "tarot",
    "tart",
    "teal",
    "tiger",
    "tile",
    "tore",
    "trace",
    "tract",
    "trait",
    "treat",
    "trio",
    "triple",
    "trite",
    "tropic",
    "voice",
    "whale",
];

/// Number of words in `DEMO_WORDS`
pub const DEMO_WORDS_COUNT: usize = 92;
