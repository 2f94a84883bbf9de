use rand::Rng;

/// Length of opaque bearer tokens.
pub const TOKEN_LENGTH: usize = 48;

/// Length of event invitation codes.
pub const INVITATION_CODE_LENGTH: usize = 6;

/// Generates a random alphanumeric string of the given length.
///
/// # Arguments
/// - `length` - Number of characters to generate
///
/// # Returns
/// - `String` - Random string drawn from `[A-Za-z0-9]`
pub fn alphanumeric(length: usize) -> String {
    rand::rng()
        .sample_iter(rand::distr::Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Generates a new bearer token.
pub fn token() -> String {
    alphanumeric(TOKEN_LENGTH)
}

/// Generates an event invitation code.
pub fn invitation_code() -> String {
    alphanumeric(INVITATION_CODE_LENGTH)
}
