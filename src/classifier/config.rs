use std::path::PathBuf;

use crate::text::{Stopwords, TextError};

#[derive(Debug, Clone, Default)]
pub struct ClassifierConfig {
    /// Exported TF-IDF + logistic regression artifact (JSON). `None` runs in stub mode.
    pub model_path: Option<PathBuf>,

    /// Replacement stopword list. `None` uses the built-in English list.
    pub stopwords_path: Option<PathBuf>,
}

impl ClassifierConfig {
    pub fn new<P: Into<PathBuf>>(model_path: P) -> Self {
        Self {
            model_path: Some(model_path.into()),
            stopwords_path: None,
        }
    }

    pub fn stub() -> Self {
        Self::default()
    }

    pub fn with_stopwords<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.stopwords_path = Some(path.into());
        self
    }

    /// Reads `stopwords_path`, or falls back to the built-in English list.
    pub fn load_stopwords(&self) -> Result<Stopwords, TextError> {
        match self.stopwords_path {
            Some(ref path) => Stopwords::from_file(path),
            None => Ok(Stopwords::english()),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if let Some(ref path) = self.model_path
            && path.as_os_str().is_empty()
        {
            return Err("model_path cannot be empty when provided".to_string());
        }

        if let Some(ref path) = self.stopwords_path
            && path.as_os_str().is_empty()
        {
            return Err("stopwords_path cannot be empty when provided".to_string());
        }

        Ok(())
    }
}
