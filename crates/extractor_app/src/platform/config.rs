use std::env;
use std::path::PathBuf;

/// Environment variable naming the extraction API host.
const BASE_URL_VAR: &str = "EXTRACTOR_API_BASE_URL";
/// Default API host when no environment override is present.
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080/api";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the extraction API; requests go to `{base_url}/extract`.
    pub base_url: String,
    /// Directory exported PDFs are written into.
    pub output_dir: PathBuf,
}

impl AppConfig {
    /// Loads configuration from the environment. A `.env` file in the
    /// working directory is honoured if present.
    pub fn load() -> Self {
        dotenv::dotenv().ok();

        let base_url = resolve_base_url(env::var(BASE_URL_VAR).ok());
        let output_dir = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self {
            base_url,
            output_dir,
        }
    }
}

fn resolve_base_url(var: Option<String>) -> String {
    match var {
        Some(value) if !value.trim().is_empty() => {
            value.trim().trim_end_matches('/').to_owned()
        }
        _ => DEFAULT_BASE_URL.to_owned(),
    }
}
