use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable is set but cannot be parsed.
    ///
    /// Unset variables fall back to their defaults; only malformed values are
    /// rejected. Check `.env.example` for the expected formats.
    #[error("Invalid value `{value}` for environment variable {name}: expected {expected}")]
    InvalidEnvVar {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
}
