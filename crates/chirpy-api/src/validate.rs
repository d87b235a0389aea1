//! Chirp length check and profanity filter.

pub const MAX_CHIRP_LENGTH: usize = 140;

const BANNED_WORDS: [&str; 3] = ["kerfuffle", "sharbert", "fornax"];
const REPLACEMENT: &str = "****";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChirpError {
    #[error("Chirp is too long")]
    TooLong,
}

/// Checks the raw body against `MAX_CHIRP_LENGTH` (counted in characters)
/// and returns the cleaned body.
///
/// Each banned word is replaced in its lowercase and capitalized forms only,
/// as a plain substring: `Kerfuffles` becomes `****s`, `KERFUFFLE` is kept.
pub fn validate_chirp(body: &str) -> Result<String, ChirpError> {
    if body.chars().count() > MAX_CHIRP_LENGTH {
        return Err(ChirpError::TooLong);
    }

    let mut cleaned = body.to_string();
    for word in BANNED_WORDS {
        cleaned = cleaned.replace(word, REPLACEMENT);
        cleaned = cleaned.replace(&capitalize(word), REPLACEMENT);
    }
    Ok(cleaned)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
