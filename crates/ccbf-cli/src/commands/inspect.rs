//! `ccbf inspect` - header and fill statistics of a filter file

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use ccbf_filter::{BloomFilter, Header};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InspectReport {
    pub version: u16,
    pub hash_count: u16,
    pub bit_count: u32,
    pub file_size: usize,
    pub bits_set: usize,
    pub fill_ratio: f64,
    pub estimated_fpr: f64,
}

pub fn run_inspect<W: Write>(path: &Path, json: bool, out: &mut W) -> Result<InspectReport> {
    let data = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let header = Header::decode(&data)
        .with_context(|| format!("Failed to parse header of {}", path.display()))?;
    let filter = BloomFilter::from_bytes(&data)
        .with_context(|| format!("Failed to load filter {}", path.display()))?;

    let report = InspectReport {
        version: header.version,
        hash_count: header.hash_count,
        bit_count: header.bit_count,
        file_size: data.len(),
        bits_set: filter.bits_set(),
        fill_ratio: filter.fill_ratio(),
        estimated_fpr: filter.estimated_fpr(),
    };

    if json {
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
    } else {
        writeln!(out, "File: {}", path.display())?;
        writeln!(out, "Format version: {}", report.version)?;
        writeln!(out, "Hash functions: {}", report.hash_count)?;
        writeln!(out, "Bit array size: {} bits", report.bit_count)?;
        writeln!(out, "File size: {} bytes", report.file_size)?;
        writeln!(
            out,
            "Bits set: {} ({:.2}%)",
            report.bits_set,
            report.fill_ratio * 100.0
        )?;
        writeln!(out, "Estimated false positive rate: {:.4}", report.estimated_fpr)?;
    }

    Ok(report)
}
