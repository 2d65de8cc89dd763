use crate::error::PromptError;

pub const API_KEY_VAR: &str = "OPENROUTER_API_KEY";
pub const OPENROUTER_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const OPENROUTER_MODEL: &str = "openrouter/google/gemini-pro-1.5";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

impl AppConfig {
    /// Reads the credential from the process environment. Call after `dotenv()`.
    pub fn from_env() -> Result<Self, PromptError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, PromptError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or(PromptError::MissingCredential(API_KEY_VAR))?;

        Ok(Self {
            api_key,
            base_url: OPENROUTER_BASE_URL.to_string(),
            model: OPENROUTER_MODEL.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_key_and_fixed_endpoint() {
        let config = AppConfig::from_lookup(|name| {
            (name == API_KEY_VAR).then(|| "sk-or-test".to_string())
        })
        .unwrap();

        assert_eq!(config.api_key, "sk-or-test");
        assert_eq!(config.base_url, "https://openrouter.ai/api/v1");
        assert_eq!(config.model, "openrouter/google/gemini-pro-1.5");
    }

    #[test]
    fn missing_key_is_a_configuration_error() {
        let err = AppConfig::from_lookup(|_| None).unwrap_err();
        assert!(matches!(err, PromptError::MissingCredential(API_KEY_VAR)));
        assert_eq!(
            err.to_string(),
            "OPENROUTER_API_KEY environment variable not found."
        );
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let err = AppConfig::from_lookup(|_| Some("   ".to_string())).unwrap_err();
        assert!(matches!(err, PromptError::MissingCredential(_)));
    }
}
