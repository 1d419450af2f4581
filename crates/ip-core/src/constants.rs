/// Weight of the most specific (primary) phonetic key.
pub const PRIMARY_WEIGHT: u8 = 3;

/// Weight of the secondary phonetic key.
pub const SECONDARY_WEIGHT: u8 = 2;

/// Weight of the most relaxed (tertiary) phonetic key.
pub const TERTIARY_WEIGHT: u8 = 1;

/// Logical OR between two query alternatives, in `tsquery` syntax.
pub const OR_SEPARATOR: &str = " | ";

/// Word boundary for `to_tokens`. Only the plain space splits words.
pub const WORD_SEPARATOR: char = ' ';
