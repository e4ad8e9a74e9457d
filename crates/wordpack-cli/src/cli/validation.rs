use wordpack_compose::color::Rgb;
use wordpack_config::EnvParams;

/// Parse an `--env` value into a key/value pair.
///
/// A bare key is a flag set to `true`, matching how the engine passes
/// `--env production`.
///
/// # Errors
///
/// Returns an error message when the key is empty.
pub fn parse_env_pair(s: &str) -> Result<(String, String), String> {
    let (key, value) = EnvParams::parse_pair(s);
    if key.is_empty() {
        return Err(format!("Parameter key cannot be empty: '{}'", s));
    }
    Ok((key, value))
}

/// Validate a `#rgb` / `#rrggbb` color.
pub fn parse_color(s: &str) -> Result<String, String> {
    Rgb::parse(s)
        .map(|_| s.to_string())
        .map_err(|e| e.to_string())
}
