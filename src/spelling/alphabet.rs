//! The fixed character → code-word table.
//!
//! Letters use the NATO/ICAO spelling alphabet, digits the ICAO digit words,
//! and a handful of punctuation characters map to bracketed names so that
//! spelled-out email addresses and hostnames stay readable. Everything else
//! falls back to [`PLACEHOLDER`](crate::spelling::PLACEHOLDER).

/// Letters A–Z and their code words, in alphabet order.
pub static LETTERS: [(char, &str); 26] = [
    ('A', "Alfa"),
    ('B', "Bravo"),
    ('C', "Charlie"),
    ('D', "Delta"),
    ('E', "Echo"),
    ('F', "Foxtrot"),
    ('G', "Golf"),
    ('H', "Hotel"),
    ('I', "India"),
    ('J', "Juliett"),
    ('K', "Kilo"),
    ('L', "Lima"),
    ('M', "Mike"),
    ('N', "November"),
    ('O', "Oscar"),
    ('P', "Papa"),
    ('Q', "Quebec"),
    ('R', "Romeo"),
    ('S', "Sierra"),
    ('T', "Tango"),
    ('U', "Uniform"),
    ('V', "Victor"),
    ('W', "Whiskey"),
    ('X', "X-ray"),
    ('Y', "Yankee"),
    ('Z', "Zulu"),
];

/// Digits 0–9 and their ICAO pronunciation words.
pub static DIGITS: [(char, &str); 10] = [
    ('0', "Zero"),
    ('1', "One"),
    ('2', "Two"),
    ('3', "Tree"),
    ('4', "Fower"),
    ('5', "Fife"),
    ('6', "Six"),
    ('7', "Seven"),
    ('8', "Ait"),
    ('9', "Niner"),
];

/// Punctuation that commonly appears in spelled-out identifiers.
pub static SYMBOLS: [(char, &str); 8] = [
    (' ', "[space]"),
    ('.', "[dot]"),
    ('-', "[dash]"),
    ('_', "[underscore]"),
    (';', "[semicolon]"),
    (':', "[colon]"),
    ('&', "[ampersand]"),
    ('@', "[at]"),
];

/// Look up the code word for an already-normalized character.
///
/// Returns `None` for characters outside the table; callers decide the
/// fallback (see [`resolve_code_word`](crate::spelling::resolve_code_word)).
pub fn code_word(c: char) -> Option<&'static str> {
    LETTERS
        .iter()
        .chain(&DIGITS)
        .chain(&SYMBOLS)
        .find(|(key, _)| *key == c)
        .map(|(_, word)| *word)
}
