use std::cmp::Ordering;
use std::time::Instant;

use rayon::prelude::*;
use serde::Serialize;

pub mod align;
pub mod dictionary;
pub mod error;
pub mod heap;

pub use align::{score, score_with_costs, Costs};
pub use dictionary::Dictionary;
pub use error::{Result, SpellError};
pub use heap::MaxHeap;

/// Suggestions returned per lookup unless configured otherwise.
pub const SUGGESTION_LIMIT: usize = 10;

macro_rules! insert_prefix_str {
    ($filename:expr) => {
        if cfg!(feature = "onedir") {
            concat!("./", $filename)
        } else {
            concat!(env!("CARGO_MANIFEST_DIR"), "/data/", $filename)
        }
    };
}

/// Location of the bundled English word list.
pub fn dictionary_path() -> &'static str {
    insert_prefix_str!("dictionary.txt")
}

/// A dictionary word paired with its alignment score against the input.
///
/// Candidates order by score, then by their position in the dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub word: String,
    pub score: u32,
    #[serde(skip)]
    position: usize,
}

impl Candidate {
    pub fn new(word: String, score: u32, position: usize) -> Self {
        Candidate {
            word,
            score,
            position,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .cmp(&other.score)
            .then_with(|| self.position.cmp(&other.position))
            .then_with(|| self.word.cmp(&other.word))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// How the best candidates are picked out of the scored dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// Heap-sort every candidate and read the front.
    #[default]
    HeapSort,
    /// Stream candidates through a heap holding at most `limit` entries.
    Bounded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestConfig {
    pub costs: Costs,
    pub limit: usize,
    pub selection: Selection,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        SuggestConfig {
            costs: Costs::default(),
            limit: SUGGESTION_LIMIT,
            selection: Selection::HeapSort,
        }
    }
}

/// The ten dictionary words closest to `word`, most similar first.
pub fn lookup(word: &str, dictionary: &Dictionary) -> Result<Vec<Candidate>> {
    lookup_with_config(word, dictionary, &SuggestConfig::default())
}

pub fn lookup_with_config(
    word: &str,
    dictionary: &Dictionary,
    config: &SuggestConfig,
) -> Result<Vec<Candidate>> {
    if !dictionary.is_loaded() {
        log::error!("Dictionary not loaded, cannot look up {:?}", word);
        return Err(SpellError::DictionaryNotLoaded);
    }

    let start = Instant::now();
    let candidates = score_all(word, dictionary, &config.costs);
    log::debug!(
        "Scored {} words against {:?} in {:?}",
        candidates.len(),
        word,
        start.elapsed()
    );

    let start = Instant::now();
    let ranked = match config.selection {
        Selection::HeapSort => MaxHeap::from_vec(candidates).top_k(config.limit),
        Selection::Bounded => heap::smallest_k(candidates, config.limit),
    };
    log::debug!(
        "Selected {} candidates ({:?}) in {:?}",
        ranked.len(),
        config.selection,
        start.elapsed()
    );

    Ok(ranked)
}

fn score_all(word: &str, dictionary: &Dictionary, costs: &Costs) -> Vec<Candidate> {
    let target: Vec<char> = word.chars().collect();

    dictionary
        .words()
        .par_iter()
        .enumerate()
        .map(|(position, entry)| {
            let chars: Vec<char> = entry.chars().collect();
            let score = align::score_chars(&target, &chars, costs);
            Candidate::new(entry.clone(), score, position)
        })
        .collect()
}

pub struct AlignmentSpellChecker {
    dictionary: Dictionary,
    config: SuggestConfig,
}

impl AlignmentSpellChecker {
    pub fn new(dictionary: Dictionary, config: SuggestConfig) -> Self {
        AlignmentSpellChecker { dictionary, config }
    }

    pub fn with_dictionary(dictionary: Dictionary) -> Self {
        AlignmentSpellChecker::new(dictionary, SuggestConfig::default())
    }

    /// Loads the bundled word list from [`dictionary_path`].
    pub fn from_bundled() -> Result<Self> {
        Ok(AlignmentSpellChecker::with_dictionary(Dictionary::load(
            dictionary_path(),
        )?))
    }

    pub fn spell(&self, word: &str) -> Result<Vec<Candidate>> {
        lookup_with_config(word, &self.dictionary, &self.config)
    }

    /// The single best suggestion, or `word` itself when there is none.
    pub fn correct(&self, word: &str) -> String {
        let best = SuggestConfig {
            limit: 1,
            ..self.config
        };

        match lookup_with_config(word, &self.dictionary, &best) {
            Ok(candidates) => match candidates.into_iter().next() {
                Some(candidate) => candidate.word,
                None => word.to_string(),
            },
            Err(err) => {
                log::warn!("No correction for {:?}: {}", word, err);
                word.to_string()
            }
        }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn config(&self) -> &SuggestConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(dict: &[&str]) -> Dictionary {
        Dictionary::from_words(dict.iter().copied())
    }

    #[test]
    fn candidate_ordering_breaks_ties_by_position() {
        let a = Candidate::new("zz".to_string(), 3, 0);
        let b = Candidate::new("aa".to_string(), 3, 1);
        let c = Candidate::new("mm".to_string(), 1, 2);
        let mut v = vec![a.clone(), b.clone(), c.clone()];
        v.sort();
        assert_eq!(v, vec![c, a, b]);
    }

    #[test]
    fn ranks_close_words_first() {
        let result = lookup("helo", &words(&["world", "help", "hello"])).unwrap();
        let ranked: Vec<(&str, u32)> = result.iter().map(|c| (c.word.as_str(), c.score)).collect();
        assert_eq!(ranked[0], ("hello", 2));
        assert_eq!(ranked[1], ("help", 3));
        assert_eq!(ranked[2].0, "world");
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn empty_dictionary_is_an_error() {
        match lookup("anything", &Dictionary::new()) {
            Err(SpellError::DictionaryNotLoaded) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn empty_word_prefers_short_entries() {
        let result = lookup("", &words(&["three", "a", "to"])).unwrap();
        let ranked: Vec<(&str, u32)> = result.iter().map(|c| (c.word.as_str(), c.score)).collect();
        assert_eq!(ranked, vec![("a", 2), ("to", 4), ("three", 10)]);
    }

    #[test]
    fn zero_limit_yields_nothing() {
        let config = SuggestConfig {
            limit: 0,
            ..SuggestConfig::default()
        };
        assert!(lookup_with_config("x", &words(&["x"]), &config)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn correct_picks_best_or_echoes() {
        let checker = AlignmentSpellChecker::with_dictionary(words(&["hello", "help", "world"]));
        assert_eq!(checker.correct("helo"), "hello");
        assert_eq!(checker.correct("world"), "world");

        let empty = AlignmentSpellChecker::with_dictionary(Dictionary::new());
        assert_eq!(empty.correct("helo"), "helo");
    }

    #[test]
    fn candidate_serializes_word_and_score_only() {
        let json = serde_json::to_string(&Candidate::new("hello".to_string(), 2, 7)).unwrap();
        assert_eq!(json, r#"{"word":"hello","score":2}"#);
    }
}
