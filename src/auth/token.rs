// API token verification
// The deployment issues a single shared token to trusted clients

/// Verifies a presented bearer token against the configured API token
///
/// # Arguments
/// * `presented` - The token taken from the Authorization header
/// * `expected` - The configured API token (from environment)
///
/// # Returns
/// * `Ok(())` - If the token matches
/// * `Err(String)` - If the token is empty or does not match
///
/// # Example
/// ```
/// use teamroster_api::auth::token::verify_token;
///
/// assert!(verify_token("sekrit", "sekrit").is_ok());
/// assert!(verify_token("wrong", "sekrit").is_err());
/// ```
pub fn verify_token(presented: &str, expected: &str) -> Result<(), String> {
    if presented.is_empty() {
        return Err("Empty bearer token".to_string());
    }

    if presented != expected {
        return Err("Invalid token".to_string());
    }

    Ok(())
}
