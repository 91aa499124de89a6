//! `ccbf build` - dictionary file to filter file

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{bail, Context, Result};
use ccbf_filter::BloomFilter;
use serde::Serialize;
use tracing::{debug, info};

use crate::words::{dictionary_words, normalize};

/// Statistics printed after a build
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BuildReport {
    pub words_inserted: usize,
    pub bit_count: u32,
    pub byte_count: usize,
    pub hash_count: u16,
    pub file_size: u64,
}

/// Size a filter for `words` at `fpr` and insert every normalized word
pub fn build_filter(words: &[&str], fpr: f64) -> Result<BloomFilter> {
    if words.is_empty() {
        bail!("dictionary contains no words");
    }

    let mut filter = BloomFilter::new(words.len() as u64, fpr)
        .with_context(|| format!("cannot size filter for {} words at rate {}", words.len(), fpr))?;
    for word in words {
        filter.insert(&normalize(word));
    }
    Ok(filter)
}

/// Read `dict_path`, build the filter, save it to `output` and report
pub fn run_build<W: Write>(
    dict_path: &Path,
    output: &Path,
    fpr: f64,
    json: bool,
    out: &mut W,
) -> Result<BuildReport> {
    if !json {
        writeln!(out, "Reading dictionary from {}...", dict_path.display())?;
    }
    let text = fs::read_to_string(dict_path)
        .with_context(|| format!("Failed to read dictionary {}", dict_path.display()))?;
    let words = dictionary_words(&text);
    debug!(path = %dict_path.display(), words = words.len(), "dictionary loaded");

    if !json {
        writeln!(out, "Found {} words in dictionary", words.len())?;
        writeln!(out, "Building bloom filter...")?;
    }
    let filter = build_filter(&words, fpr)?;

    if !json {
        writeln!(out, "Saving bloom filter to {}...", output.display())?;
    }
    filter
        .save_to_file(output)
        .with_context(|| format!("Failed to write filter {}", output.display()))?;

    let file_size = fs::metadata(output)
        .with_context(|| format!("Failed to stat {}", output.display()))?
        .len();
    let report = BuildReport {
        words_inserted: words.len(),
        bit_count: filter.bit_count(),
        byte_count: filter.as_bytes().len(),
        hash_count: filter.hash_count(),
        file_size,
    };
    info!(
        output = %output.display(),
        bits = report.bit_count,
        hashes = report.hash_count,
        "filter saved"
    );

    if json {
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
    } else {
        writeln!(out)?;
        writeln!(out, "Bloom Filter Statistics:")?;
        writeln!(out, "Words inserted: {}", report.words_inserted)?;
        writeln!(
            out,
            "Bit array size: {} bits ({} bytes)",
            report.bit_count, report.byte_count
        )?;
        writeln!(out, "Hash functions: {}", report.hash_count)?;
        writeln!(out, "Output file size: {} bytes", report.file_size)?;
    }

    Ok(report)
}
