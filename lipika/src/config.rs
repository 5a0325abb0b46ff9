use serde::Deserialize;
use std::env;

/// Default base URL of the translation/OCR backend.
const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Tesseract language set covering both supported scripts plus English.
const DEFAULT_OCR_LANGUAGES: &str = "nep+sin+eng";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    pub ocr: OcrConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OcrConfig {
    pub languages: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: env::var("LIPIKA_API_BASE")
                    .unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
            },
            ocr: OcrConfig {
                languages: env::var("LIPIKA_OCR_LANGUAGES")
                    .unwrap_or_else(|_| DEFAULT_OCR_LANGUAGES.to_string()),
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    static ENV_TEST_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn test_config_defaults() {
        let _guard = ENV_TEST_MUTEX.lock().unwrap();

        std::env::remove_var("LIPIKA_API_BASE");
        std::env::remove_var("LIPIKA_OCR_LANGUAGES");

        let config = Config::from_env();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.ocr.languages, "nep+sin+eng");
    }

    #[test]
    fn test_config_from_env() {
        let _guard = ENV_TEST_MUTEX.lock().unwrap();

        std::env::set_var("LIPIKA_API_BASE", "https://api.example.com");
        std::env::set_var("LIPIKA_OCR_LANGUAGES", "eng");

        let config = Config::from_env();
        assert_eq!(config.api.base_url, "https://api.example.com");
        assert_eq!(config.ocr.languages, "eng");

        std::env::remove_var("LIPIKA_API_BASE");
        std::env::remove_var("LIPIKA_OCR_LANGUAGES");
    }
}
