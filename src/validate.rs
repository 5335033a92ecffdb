//! Chirp validation and profanity redaction.
//!
//! [`validate`] is a pure function: no I/O, no shared mutable state. The
//! [`ValidationPolicy`] it reads is built once at startup and only ever
//! shared by reference, so concurrent requests read it without locking.
//!
//! The pipeline is fixed:
//!
//! ```text
//! body ──split(' ')──▶ tokens ──redact──▶ tokens ──join(' ')──▶ cleaned ──len ≤ max?──▶ outcome
//! ```
//!
//! Redaction happens *before* the length check. A banned word is at least as
//! long as the redaction token, so redaction can only shorten a chirp.

use std::collections::HashSet;

use serde::Deserialize;

/// Maximum chirp length in UTF-16 code units, counted after redaction.
pub const MAX_CHIRP_LENGTH: usize = 140;

/// Words replaced by [`REDACTION_TOKEN`], matched case-insensitively as whole tokens.
pub const BANNED_WORDS: [&str; 3] = ["kerfuffle", "sharbert", "fornax"];

pub const REDACTION_TOKEN: &str = "****";

/// Immutable moderation settings.
#[derive(Clone, Debug)]
pub struct ValidationPolicy {
    max_length: usize,
    banned_words: HashSet<String>,
    redaction_token: String,
}

impl ValidationPolicy {
    /// Banned words are lowercased on the way in; matching compares against
    /// the lowercased token.
    pub fn new<I, S>(max_length: usize, banned_words: I, redaction_token: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            max_length,
            banned_words: banned_words.into_iter().map(|w| w.as_ref().to_lowercase()).collect(),
            redaction_token: redaction_token.into(),
        }
    }

    pub fn max_length(&self) -> usize { self.max_length }
    pub fn redaction_token(&self) -> &str { &self.redaction_token }

    /// Whole-token, case-insensitive membership test.
    pub fn is_banned(&self, token: &str) -> bool {
        self.banned_words.contains(&token.to_lowercase())
    }
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self::new(MAX_CHIRP_LENGTH, BANNED_WORDS, REDACTION_TOKEN)
    }
}

/// The decoded request payload.
///
/// `body` must be present and a JSON string; anything else fails
/// deserialization before the validator ever sees it.
#[derive(Debug, Deserialize)]
pub struct ChirpInput {
    pub body: String,
}

/// Why a chirp was refused.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Rejection {
    /// Longer than the policy allows, measured after redaction.
    TooLong { max_length: usize },
    /// The request body did not have the expected shape.
    Malformed,
}

impl Rejection {
    /// The client-facing message.
    pub fn message(&self) -> String {
        match self {
            Self::TooLong { max_length } => format!("Chirp is too long. Max length is {max_length}"),
            Self::Malformed => "Invalid request body".to_owned(),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ValidationOutcome {
    Accepted { cleaned_body: String },
    Rejected(Rejection),
}

impl ValidationOutcome {
    /// Converts the outcome into a `Result` so callers can propagate with `?`.
    pub fn into_result(self) -> Result<String, Rejection> {
        match self {
            Self::Accepted { cleaned_body } => Ok(cleaned_body),
            Self::Rejected(reason) => Err(reason),
        }
    }
}

/// Redacts banned words, then checks the length of what is left.
pub fn validate(input: &ChirpInput, policy: &ValidationPolicy) -> ValidationOutcome {
    let cleaned_body = redact(&input.body, policy);

    if utf16_len(&cleaned_body) > policy.max_length {
        return ValidationOutcome::Rejected(Rejection::TooLong { max_length: policy.max_length });
    }

    ValidationOutcome::Accepted { cleaned_body }
}

/// Length as browsers and JSON clients count it: characters outside the
/// Basic Multilingual Plane (most emoji) count twice.
fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}

/// Splits on the literal space character only. Runs of spaces yield empty
/// tokens, which survive the round trip so spacing is preserved exactly.
fn redact(body: &str, policy: &ValidationPolicy) -> String {
    body.split(' ')
        .map(|token| if policy.is_banned(token) { policy.redaction_token() } else { token })
        .collect::<Vec<_>>()
        .join(" ")
}
