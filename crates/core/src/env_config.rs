//! Environment variable parsing with warn-level logging for invalid values.

/// Parse an environment variable with a default fallback.
///
/// - If the variable is not set: returns `default` silently (expected case).
/// - If the variable is set but cannot be parsed: logs a warning and returns `default`.
pub fn env_parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    default: T,
) -> T {
    match std::env::var(var) {
        Ok(v) => match v.parse() {
            Ok(n) => n,
            Err(_) => {
                tracing::warn!(
                    var,
                    value = %v,
                    default = %default,
                    "invalid env var value, using default"
                );
                default
            },
        },
        Err(_) => default,
    }
}

/// Read a boolean flag such as `STARDEX_DEMO`.
///
/// `1`, `true`, `yes` and `on` (any case) are true; unset or anything else is false.
#[must_use]
pub fn env_flag(var: &str) -> bool {
    std::env::var(var).is_ok_and(|v| {
        matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
    })
}

/// Read a required, non-empty environment variable.
///
/// # Errors
/// Returns the variable name when it is unset or blank.
pub fn env_required(var: &str) -> Result<String, String> {
    match std::env::var(var) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(format!("{var} environment variable must be set")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Edition 2024 marks env mutation unsafe; each test uses its own variable.

    #[test]
    fn test_env_parse_valid_value() {
        let var_name = "STARDEX_TEST_ENV_PARSE_VALID_98271";
        unsafe { std::env::set_var(var_name, "42") };
        let result: u32 = env_parse_with_default(var_name, 10);
        assert_eq!(result, 42);
        unsafe { std::env::remove_var(var_name) };
    }

    #[test]
    fn test_env_parse_invalid_value() {
        let var_name = "STARDEX_TEST_ENV_PARSE_INVALID_98272";
        unsafe { std::env::set_var(var_name, "banana") };
        let result: u32 = env_parse_with_default(var_name, 10);
        assert_eq!(result, 10);
        unsafe { std::env::remove_var(var_name) };
    }

    #[test]
    fn test_env_parse_missing_var() {
        let var_name = "STARDEX_TEST_ENV_PARSE_MISSING_98273";
        unsafe { std::env::remove_var(var_name) };
        let result: u32 = env_parse_with_default(var_name, 10);
        assert_eq!(result, 10);
    }

    #[test]
    fn test_env_flag_values() {
        let var_name = "STARDEX_TEST_ENV_FLAG_98274";
        unsafe { std::env::set_var(var_name, "TRUE") };
        assert!(env_flag(var_name));
        unsafe { std::env::set_var(var_name, "0") };
        assert!(!env_flag(var_name));
        unsafe { std::env::remove_var(var_name) };
        assert!(!env_flag(var_name));
    }

    #[test]
    fn test_env_required_blank_is_error() {
        let var_name = "STARDEX_TEST_ENV_REQUIRED_98275";
        unsafe { std::env::set_var(var_name, "  ") };
        assert!(env_required(var_name).is_err());
        unsafe { std::env::set_var(var_name, "redis://localhost") };
        assert_eq!(env_required(var_name).unwrap(), "redis://localhost");
        unsafe { std::env::remove_var(var_name) };
    }
}
