// Loads the pool of error titles for the emoji count command from a JSON file.
//
// Two layouts are accepted:
//   ["Nope.", "Try again."]
//   { "error_replies": ["Nope.", "Try again."] }

use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ReplyPoolError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Reply pool contains no usable titles")]
    Empty,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ReplyFile {
    List(Vec<String>),
    Table { error_replies: Vec<String> },
}

pub struct JsonReplyPool {
    path: PathBuf,
}

impl JsonReplyPool {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[allow(dead_code)]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the titles, dropping blank entries.
    pub fn load(&self) -> Result<Vec<String>, ReplyPoolError> {
        let file = std::fs::File::open(&self.path)?;
        let parsed: ReplyFile = serde_json::from_reader(std::io::BufReader::new(file))?;

        let titles = match parsed {
            ReplyFile::List(titles) => titles,
            ReplyFile::Table { error_replies } => error_replies,
        };

        let titles: Vec<String> = titles
            .into_iter()
            .map(|title| title.trim().to_string())
            .filter(|title| !title.is_empty())
            .collect();

        if titles.is_empty() {
            return Err(ReplyPoolError::Empty);
        }

        tracing::debug!(
            path = %self.path.display(),
            count = titles.len(),
            "Loaded emoji error titles"
        );
        Ok(titles)
    }
}
