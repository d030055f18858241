//! Short code generation and alias validation.
//!
//! [`CodeGenerator`] draws fixed-length codes uniformly from an alphabet.
//! It does not check uniqueness; the allocation service retries on collision.

use std::sync::Mutex;

use crate::error::AppError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::json;

/// Default alphabet: lowercase ASCII letters.
pub const DEFAULT_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Default code length.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Longest alias a caller may choose.
pub const MAX_ALIAS_LENGTH: usize = 64;

/// Path segments that would shadow service routes.
pub const RESERVED_CODES: &[&str] = &["shorten", "validate", "analytics", "api", "health"];

/// Random fixed-length code source.
///
/// The random source is behind a mutex so a single generator can be shared
/// by every request. Use [`CodeGenerator::seeded`] for reproducible output.
#[derive(Debug)]
pub struct CodeGenerator {
    alphabet: Vec<char>,
    length: usize,
    rng: Mutex<StdRng>,
}

impl CodeGenerator {
    /// Creates a generator seeded from the operating system.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the alphabet is empty or the length is zero.
    pub fn new(alphabet: &str, length: usize) -> Result<Self, AppError> {
        Self::with_rng(alphabet, length, StdRng::from_os_rng())
    }

    /// Creates a deterministic generator for tests and reproducible runs.
    pub fn seeded(alphabet: &str, length: usize, seed: u64) -> Result<Self, AppError> {
        Self::with_rng(alphabet, length, StdRng::seed_from_u64(seed))
    }

    fn with_rng(alphabet: &str, length: usize, rng: StdRng) -> Result<Self, AppError> {
        let mut chars: Vec<char> = Vec::new();
        for c in alphabet.chars() {
            if !chars.contains(&c) {
                chars.push(c);
            }
        }

        if chars.is_empty() {
            return Err(AppError::bad_request(
                "Code alphabet must not be empty",
                json!({}),
            ));
        }
        if length == 0 {
            return Err(AppError::bad_request(
                "Code length must be greater than 0",
                json!({ "length": length }),
            ));
        }

        Ok(Self {
            alphabet: chars,
            length,
            rng: Mutex::new(rng),
        })
    }

    /// Replaces the random source with one seeded from `seed`.
    pub fn reseed(&self, seed: u64) {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        *rng = StdRng::seed_from_u64(seed);
    }

    /// Draws one candidate code.
    pub fn generate(&self) -> String {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());

        (0..self.length)
            .map(|_| self.alphabet[rng.random_range(0..self.alphabet.len())])
            .collect()
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self {
            alphabet: DEFAULT_ALPHABET.chars().collect(),
            length: DEFAULT_CODE_LENGTH,
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }
}

/// Validates a caller-chosen alias.
///
/// # Rules
///
/// - Length: 1-64 characters
/// - Allowed characters: ASCII letters, digits, `-` and `_`
/// - Cannot be a reserved route segment
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_alias(alias: &str) -> Result<(), AppError> {
    if alias.is_empty() || alias.len() > MAX_ALIAS_LENGTH {
        return Err(AppError::bad_request(
            "Alias must be 1-64 characters",
            json!({ "provided_length": alias.len() }),
        ));
    }

    if !alias
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(AppError::bad_request(
            "Alias can only contain letters, digits, hyphens and underscores",
            json!({ "alias": alias }),
        ));
    }

    if RESERVED_CODES.contains(&alias) {
        return Err(AppError::bad_request(
            "This alias is reserved",
            json!({ "alias": alias }),
        ));
    }

    Ok(())
}
