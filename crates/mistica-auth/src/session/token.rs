//! Opaque session token generation.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Length of generated session tokens.
const TOKEN_LENGTH: usize = 48;

/// Generate a random alphanumeric session token.
pub fn generate() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(TOKEN_LENGTH)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_length_and_charset() {
        let token = generate();
        assert_eq!(token.len(), TOKEN_LENGTH);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_tokens_are_unique() {
        assert_ne!(generate(), generate());
    }
}
