//! Frontend configuration module
//!
//! Values can be overridden at build time through environment variables.

const DEFAULT_SUPPORT_URL: &str = "mailto:support@mentorconnect.example";
const DEFAULT_TOAST_TIMEOUT_MS: u32 = 4_000;

/// Frontend configuration for external links and UI timings
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    /// Where the "Contact support" links point
    pub support_url: String,
    /// How long a toast stays on screen
    pub toast_timeout_ms: u32,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            support_url: option_env!("MENTORCONNECT_SUPPORT_URL")
                .unwrap_or(DEFAULT_SUPPORT_URL)
                .to_string(),
            toast_timeout_ms: parse_timeout(option_env!("MENTORCONNECT_TOAST_TIMEOUT_MS")),
        }
    }
}

impl FrontendConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn support_url(&self) -> &str {
        &self.support_url
    }
}

/// Zero or unparsable values keep the default so toasts never vanish instantly.
fn parse_timeout(raw: Option<&str>) -> u32 {
    raw.and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|ms| *ms > 0)
        .unwrap_or(DEFAULT_TOAST_TIMEOUT_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_timeout_accepts_positive_values() {
        assert_eq!(parse_timeout(Some("2500")), 2_500);
        assert_eq!(parse_timeout(Some(" 800 ")), 800);
    }

    #[test]
    fn test_parse_timeout_falls_back_to_default() {
        assert_eq!(parse_timeout(None), DEFAULT_TOAST_TIMEOUT_MS);
        assert_eq!(parse_timeout(Some("0")), DEFAULT_TOAST_TIMEOUT_MS);
        assert_eq!(parse_timeout(Some("soon")), DEFAULT_TOAST_TIMEOUT_MS);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_frontend_config_default() {
        let config = FrontendConfig::default();
        assert!(!config.support_url().is_empty());
        assert!(config.toast_timeout_ms > 0);
    }

    #[wasm_bindgen_test]
    fn test_frontend_config_debug() {
        let debug_str = format!("{:?}", FrontendConfig::new());
        assert!(debug_str.contains("FrontendConfig"));
        assert!(debug_str.contains("support_url"));
    }
}
