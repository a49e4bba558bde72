//! Application configuration loaded from environment variables.

use anyhow::bail;

/// Which AI provider backs the chat-completion endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiProvider {
    /// OpenAI chat completions (default).
    OpenAi,
    /// Google Gemini generateContent.
    Gemini,
}

impl AiProvider {
    fn parse(raw: &str) -> anyhow::Result<Self> {
        match raw.trim().to_lowercase().as_str() {
            "openai" => Ok(Self::OpenAi),
            "gemini" => Ok(Self::Gemini),
            other => bail!("unknown AI_PROVIDER {other:?} (expected \"openai\" or \"gemini\")"),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:8080").
    pub bind_addr: String,

    /// Base URL of this service, used for og:image and canonical URLs.
    pub base_url: String,

    /// URL of the MyMemo web app, used for the share page's call-to-action.
    pub app_url: String,

    /// Base URL of the hosted backend (auth + REST storage).
    pub backend_url: String,

    /// Backend anon/publishable API key sent as the `apikey` header.
    pub backend_anon_key: String,

    /// Which provider backs the chat endpoints.
    pub ai_provider: AiProvider,

    /// OpenAI API key. Required for `AI_PROVIDER=openai` and for the
    /// embedding step of ai-search regardless of provider.
    pub openai_api_key: Option<String>,

    /// OpenAI chat model.
    pub openai_model: String,

    /// OpenAI API base URL (override for proxies/test doubles).
    pub openai_base_url: String,

    /// OpenAI embedding model used by ai-search.
    pub embedding_model: String,

    /// Gemini API key. Required for `AI_PROVIDER=gemini`.
    pub gemini_api_key: Option<String>,

    /// Gemini model name.
    pub gemini_model: String,

    /// Gemini API base URL.
    pub gemini_base_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// All variables have local-development defaults except the API keys,
    /// which stay `None` when unset (the AI endpoints then fail with a
    /// configuration error at request time, mirroring the original
    /// functions' behavior).
    ///
    /// - `MYMEMO_BIND_ADDR`: bind address (default: "0.0.0.0:8080")
    /// - `MYMEMO_BASE_URL`: public base URL (default: "http://localhost:8080")
    /// - `MYMEMO_APP_URL`: web app URL for the CTA link
    /// - `SUPABASE_URL`: backend base URL (default: "http://localhost:54321")
    /// - `SUPABASE_ANON_KEY`: backend anon key (default: empty)
    /// - `AI_PROVIDER`: "openai" (default) or "gemini"
    /// - `OPENAI_API_KEY`, `OPENAI_MODEL`, `OPENAI_BASE_URL`, `OPENAI_EMBEDDING_MODEL`
    /// - `GEMINI_API_KEY`, `GEMINI_MODEL`, `GEMINI_BASE_URL`
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr =
            std::env::var("MYMEMO_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let base_url = std::env::var("MYMEMO_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_string())
            .trim_end_matches('/')
            .to_string();

        let app_url = std::env::var("MYMEMO_APP_URL")
            .unwrap_or_else(|_| "https://my-web-app-b67f4.web.app".to_string())
            .trim_end_matches('/')
            .to_string();

        let backend_url = std::env::var("SUPABASE_URL")
            .unwrap_or_else(|_| "http://localhost:54321".to_string())
            .trim_end_matches('/')
            .to_string();

        let backend_anon_key = std::env::var("SUPABASE_ANON_KEY").unwrap_or_default();

        let ai_provider = match std::env::var("AI_PROVIDER") {
            Ok(raw) => AiProvider::parse(&raw)?,
            Err(_) => AiProvider::OpenAi,
        };

        let openai_api_key = std::env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty());
        let openai_model =
            std::env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string());
        let openai_base_url = std::env::var("OPENAI_BASE_URL")
            .unwrap_or_else(|_| "https://api.openai.com".to_string())
            .trim_end_matches('/')
            .to_string();
        let embedding_model = std::env::var("OPENAI_EMBEDDING_MODEL")
            .unwrap_or_else(|_| "text-embedding-3-small".to_string());

        let gemini_api_key = std::env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty());
        let gemini_model =
            std::env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-1.5-flash".to_string());
        let gemini_base_url = std::env::var("GEMINI_BASE_URL")
            .unwrap_or_else(|_| "https://generativelanguage.googleapis.com".to_string())
            .trim_end_matches('/')
            .to_string();

        tracing::info!(
            bind_addr = %bind_addr,
            base_url = %base_url,
            backend_url = %backend_url,
            ai_provider = ?ai_provider,
            "configuration loaded"
        );

        Ok(Self {
            bind_addr,
            base_url,
            app_url,
            backend_url,
            backend_anon_key,
            ai_provider,
            openai_api_key,
            openai_model,
            openai_base_url,
            embedding_model,
            gemini_api_key,
            gemini_model,
            gemini_base_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Mutex to serialize config tests that manipulate env vars.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const ENV_KEYS: &[&str] = &[
        "MYMEMO_BIND_ADDR",
        "MYMEMO_BASE_URL",
        "MYMEMO_APP_URL",
        "SUPABASE_URL",
        "SUPABASE_ANON_KEY",
        "AI_PROVIDER",
        "OPENAI_API_KEY",
        "OPENAI_MODEL",
        "OPENAI_BASE_URL",
        "OPENAI_EMBEDDING_MODEL",
        "GEMINI_API_KEY",
        "GEMINI_MODEL",
        "GEMINI_BASE_URL",
    ];

    /// Helper to run config tests with isolated env vars.
    /// Uses a mutex to prevent concurrent env var races.
    fn with_env_vars<F: FnOnce()>(vars: &[(&str, &str)], f: F) {
        let _guard = ENV_MUTEX.lock().unwrap();

        let saved: Vec<_> = ENV_KEYS
            .iter()
            .map(|k| (*k, std::env::var(k).ok()))
            .collect();

        // SAFETY: Serialized by mutex; only test code touches these vars.
        unsafe {
            for k in ENV_KEYS {
                std::env::remove_var(k);
            }
            for (k, v) in vars {
                std::env::set_var(k, v);
            }
        }

        f();

        // SAFETY: Restoring original env state.
        unsafe {
            for (k, v) in &saved {
                match v {
                    Some(val) => std::env::set_var(k, val),
                    None => std::env::remove_var(k),
                }
            }
        }
    }

    #[test]
    fn config_defaults() {
        with_env_vars(&[], || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.bind_addr, "0.0.0.0:8080");
            assert_eq!(config.base_url, "http://localhost:8080");
            assert_eq!(config.backend_url, "http://localhost:54321");
            assert_eq!(config.ai_provider, AiProvider::OpenAi);
            assert_eq!(config.openai_model, "gpt-4o-mini");
            assert_eq!(config.embedding_model, "text-embedding-3-small");
            assert!(config.openai_api_key.is_none());
            assert!(config.gemini_api_key.is_none());
        });
    }

    #[test]
    fn config_custom_values() {
        with_env_vars(
            &[
                ("MYMEMO_BIND_ADDR", "127.0.0.1:9090"),
                ("MYMEMO_BASE_URL", "https://functions.mymemo.dev"),
                ("SUPABASE_URL", "https://project.supabase.co"),
                ("OPENAI_API_KEY", "sk-test"),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.bind_addr, "127.0.0.1:9090");
                assert_eq!(config.base_url, "https://functions.mymemo.dev");
                assert_eq!(config.backend_url, "https://project.supabase.co");
                assert_eq!(config.openai_api_key.as_deref(), Some("sk-test"));
            },
        );
    }

    #[test]
    fn config_base_url_trailing_slash_stripped() {
        with_env_vars(&[("MYMEMO_BASE_URL", "https://functions.mymemo.dev/")], || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.base_url, "https://functions.mymemo.dev");
        });
    }

    #[test]
    fn config_gemini_provider() {
        with_env_vars(&[("AI_PROVIDER", "Gemini")], || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.ai_provider, AiProvider::Gemini);
        });
    }

    #[test]
    fn config_unknown_provider_is_rejected() {
        with_env_vars(&[("AI_PROVIDER", "claude")], || {
            assert!(Config::from_env().is_err());
        });
    }

    #[test]
    fn config_empty_api_key_treated_as_unset() {
        with_env_vars(&[("OPENAI_API_KEY", "")], || {
            let config = Config::from_env().unwrap();
            assert!(config.openai_api_key.is_none());
        });
    }
}
