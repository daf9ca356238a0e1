use anyhow::{anyhow, Result};
use std::env;
use std::str::FromStr;
use tracing::warn;

/// Retrieves an environment variable, falling back to `default` when it is unset or blank.
pub fn get_env_var_or(var: &str, default: &str) -> String {
    match env::var(var) {
        Ok(value) if !value.trim().is_empty() => value.trim().to_string(),
        _ => default.to_string(),
    }
}

/// Retrieves a required environment variable.
///
/// # Returns
/// - `Err` if the variable is unset or blank.
pub fn get_required_env_var(var: &str) -> Result<String> {
    match env::var(var) {
        Ok(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(anyhow!("{} environment variable required", var)),
    }
}

/// Retrieves an environment variable and parses it, falling back to `default`.
///
/// A value that is present but fails to parse is logged and replaced by the default.
pub fn get_env_var_parsed<T>(var: &str, default: T) -> T
where
    T: FromStr + Copy + std::fmt::Display,
{
    parse_or_default(var, env::var(var).ok().as_deref(), default)
}

/// Parses a raw variable value, treating a missing, blank or invalid value as `default`.
pub fn parse_or_default<T>(var: &str, raw: Option<&str>, default: T) -> T
where
    T: FromStr + Copy + std::fmt::Display,
{
    match raw.map(str::trim) {
        Some(value) if !value.is_empty() => value.parse().unwrap_or_else(|_| {
            warn!("Invalid value '{}' for {}, using default {}", value, var, default);
            default
        }),
        _ => default,
    }
}
