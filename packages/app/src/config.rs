use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    /// Speech API key. Absent means the app runs without audio.
    pub api_key: Option<String>,
    /// Path of the JSON file backing the key-value store.
    pub data_file: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        let api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|value| !value.is_empty())
            .or_else(|| {
                std::env::var("API_KEY")
                    .ok()
                    .filter(|value| !value.is_empty())
            });

        let data_file = std::env::var("SIGHTWORDS_DATA")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./sightwords.json"));

        Self { api_key, data_file }
    }
}
