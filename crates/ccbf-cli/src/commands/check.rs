//! `ccbf check` - look words up in a filter file

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use ccbf_filter::BloomFilter;
use tracing::debug;

use crate::words::normalize;

/// Outcome for one word as given on the command line
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordCheck {
    pub word: String,
    pub probably_correct: bool,
}

/// Look up each word after normalization
pub fn check_words(filter: &BloomFilter, words: &[String]) -> Vec<WordCheck> {
    words
        .iter()
        .map(|word| WordCheck {
            word: word.clone(),
            probably_correct: filter.contains(&normalize(word)),
        })
        .collect()
}

/// Load the filter at `filter_path`, check `words` and print the results
pub fn run_check<W: Write>(
    filter_path: &Path,
    words: &[String],
    out: &mut W,
) -> Result<Vec<WordCheck>> {
    writeln!(out, "Loading bloom filter from {}...", filter_path.display())?;
    let filter = BloomFilter::load_from_file(filter_path)
        .with_context(|| format!("Failed to load filter {}", filter_path.display()))?;
    writeln!(
        out,
        "Loaded bloom filter with {} bits and {} hash functions",
        filter.bit_count(),
        filter.hash_count()
    )?;

    writeln!(out)?;
    writeln!(out, "Checking words:")?;
    let results = check_words(&filter, words);
    debug!(
        checked = results.len(),
        misses = results.iter().filter(|r| !r.probably_correct).count(),
        "words checked"
    );

    writeln!(out)?;
    writeln!(out, "Results:")?;
    for result in &results {
        let verdict = if result.probably_correct {
            "probably correct ✓"
        } else {
            "definitely misspelled ✗"
        };
        writeln!(out, "- \"{}\": {}", result.word, verdict)?;
    }

    let misspelled: Vec<&str> = results
        .iter()
        .filter(|r| !r.probably_correct)
        .map(|r| r.word.as_str())
        .collect();

    writeln!(out)?;
    if misspelled.is_empty() {
        writeln!(out, "All words are probably correct.")?;
    } else {
        writeln!(out, "These words are possibly misspelled:")?;
        for word in misspelled {
            writeln!(out, " - {}", word)?;
        }
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter_with(words: &[&str]) -> BloomFilter {
        let mut filter = BloomFilter::new(words.len() as u64, 0.01).unwrap();
        for word in words {
            filter.insert(word);
        }
        filter
    }

    #[test]
    fn test_check_words_normalizes_queries() {
        let filter = filter_with(&["hello", "world"]);
        let words = vec!["  HELLO".to_string(), "World ".to_string()];

        let results = check_words(&filter, &words);

        assert!(results.iter().all(|r| r.probably_correct));
        assert_eq!(results[0].word, "  HELLO", "original spelling is reported");
    }

    #[test]
    fn test_run_check_reports_summary() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.bf");
        filter_with(&["hello", "world"]).save_to_file(&path).unwrap();

        let mut buf = Vec::new();
        let words = vec!["hello".to_string(), "world".to_string()];
        run_check(&path, &words, &mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("- \"hello\": probably correct ✓"));
        assert!(text.contains("All words are probably correct."));
    }

    #[test]
    fn test_run_check_propagates_version_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("future.bf");
        let mut bytes = filter_with(&["a"]).to_bytes();
        bytes[4..6].copy_from_slice(&2u16.to_be_bytes());
        std::fs::write(&path, bytes).unwrap();

        let err = run_check(&path, &["a".to_string()], &mut Vec::new()).unwrap_err();
        assert!(format!("{:#}", err).contains("Unsupported version: 2"));
    }
}
