//! Application-wide constants.
//!
//! Centralizes magic numbers and strings for better maintainability.

// ============================================================================
// Token Generation Constants
// ============================================================================

/// Characters used for generating redirect tokens (URL-safe alphanumeric)
pub const TOKEN_ALPHABET: [char; 62] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i',
    'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z', 'A', 'B',
    'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U',
    'V', 'W', 'X', 'Y', 'Z',
];

/// Maximum retry attempts when generating a unique token
pub const MAX_TOKEN_GENERATION_RETRIES: u32 = 10;

// ============================================================================
// Password Constants
// ============================================================================

/// Length of generated one-time passwords
pub const PASSWORD_LENGTH: usize = 16;
