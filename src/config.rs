use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("leankit misconfigured: missing {}", .vars.join(", "))]
    Missing { vars: Vec<&'static str> },
}

/// Account credentials for the hosted API.
#[derive(Clone, Debug)]
pub struct Config {
    pub account: String,
    pub email: String,
    pub password: String,
    pub base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let account = std::env::var("LEANKIT_ACCOUNT").ok();
        let email = std::env::var("LEANKIT_EMAIL").ok();
        let password = std::env::var("LEANKIT_PASSWORD").ok();
        let base_url = std::env::var("LEANKIT_BASE_URL").ok();

        Self::from_parts(account, email, password, base_url)
    }

    /// Builds a config from raw values. Blank values count as missing, and a
    /// blank `base_url` falls back to the account's hosted API root.
    pub fn from_parts(
        account: Option<String>,
        email: Option<String>,
        password: Option<String>,
        base_url: Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut missing = Vec::new();

        let account = match non_blank(account) {
            Some(v) => v,
            None => {
                missing.push("LEANKIT_ACCOUNT");
                String::new()
            }
        };

        let email = match non_blank(email) {
            Some(v) => v,
            None => {
                missing.push("LEANKIT_EMAIL");
                String::new()
            }
        };

        // passwords may legitimately contain surrounding spaces
        let password = match password {
            Some(v) if !v.is_empty() => v,
            _ => {
                missing.push("LEANKIT_PASSWORD");
                String::new()
            }
        };

        if !missing.is_empty() {
            return Err(ConfigError::Missing { vars: missing });
        }

        let base_url = non_blank(base_url)
            .map(|v| v.trim_end_matches('/').to_string())
            .unwrap_or_else(|| default_base_url(&account));

        Ok(Self {
            account,
            email,
            password,
            base_url,
        })
    }
}

pub fn default_base_url(account: &str) -> String {
    format!("https://{account}.leankitkanban.com/Kanban/Api")
}

fn non_blank(v: Option<String>) -> Option<String> {
    v.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}
