use std::fs::File;
use std::io::{self, BufRead};
use std::path::Path;

use crate::error::{Result, SpellError};

/// Word list consulted by lookups. Order is preserved and duplicates are
/// kept, since ties between equal scores are broken by position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    pub fn new() -> Self {
        Dictionary { words: Vec::new() }
    }

    /// Splits `text` on any run of whitespace.
    pub fn from_text(text: &str) -> Self {
        Dictionary {
            words: text.split_whitespace().map(str::to_owned).collect(),
        }
    }

    /// Each entry is split on whitespace like [`Dictionary::from_text`].
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Dictionary {
            words: words
                .into_iter()
                .flat_map(|w| {
                    w.as_ref()
                        .split_whitespace()
                        .map(str::to_owned)
                        .collect::<Vec<_>>()
                })
                .collect(),
        }
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let words = read_words(path).map_err(|source| {
            log::error!("Error loading dictionary {}: {}", path.display(), source);
            SpellError::Io {
                path: path.to_path_buf(),
                source,
            }
        })?;

        log::info!("Dictionary loaded: {} words", words.len());
        Ok(Dictionary { words })
    }

    /// Lookups refuse to run against an empty dictionary.
    pub fn is_loaded(&self) -> bool {
        !self.words.is_empty()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}

fn read_words(path: &Path) -> io::Result<Vec<String>> {
    let reader = io::BufReader::new(File::open(path)?);
    let mut words = Vec::new();

    for line in reader.lines() {
        words.extend(line?.split_whitespace().map(str::to_owned));
    }

    Ok(words)
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Dictionary::from_words(iter)
    }
}
