use regex::Regex;

/// Parse the `--grep` pattern.
///
/// # Errors
///
/// Returns the regex compiler's message when the pattern is invalid.
pub fn parse_grep(s: &str) -> Result<Regex, String> {
    if s.is_empty() {
        return Err("Pattern cannot be empty".to_string());
    }
    Regex::new(s).map_err(|err| format!("Invalid pattern '{}': {}", s, err))
}

/// Parse `--max-parallel`; zero would never make progress.
pub fn parse_max_parallel(s: &str) -> Result<usize, String> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("Expected a positive integer: '{}'", s))?;
    if value == 0 {
        return Err("Max parallel must be at least 1".to_string());
    }
    Ok(value)
}
