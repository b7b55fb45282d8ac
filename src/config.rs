// Configuration
// Environment-driven settings. Empty values are treated as unset; a missing
// classifier key silently disables that signal.

use std::env;
use std::net::SocketAddr;
use tracing::warn;

const DEFAULT_BIND: &str = "0.0.0.0:8000";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// HuggingFace inference credential for the zero-shot classifier.
    pub hf_api_key: Option<String>,
    /// ocr.space credential; the client falls back to the demo key.
    pub ocr_api_key: Option<String>,
}

fn env_nonempty(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl AppConfig {
    pub fn from_env() -> Self {
        let bind_addr = env_nonempty("FACTCHECK_BIND")
            .and_then(|raw| match raw.parse() {
                Ok(addr) => Some(addr),
                Err(e) => {
                    warn!("[config] invalid FACTCHECK_BIND '{}': {}", raw, e);
                    None
                }
            })
            .unwrap_or_else(|| DEFAULT_BIND.parse().expect("default bind address is valid"));

        Self {
            bind_addr,
            hf_api_key: env_nonempty("HF_API_KEY"),
            ocr_api_key: env_nonempty("OCR_API_KEY"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bind_parses() {
        let addr: SocketAddr = DEFAULT_BIND.parse().unwrap();
        assert_eq!(addr.port(), 8000);
    }
}
