//! Pipeline tests for conversion and batch runs
//!
//! Reuses the B-deck fixtures and checks the files written to disk.


use crate::config::{BatchConfig, ConverterConfig};
use std::path::Path;

/// Converter config writing into `<root>/single_TC`
pub fn converter_config(root: &Path) -> ConverterConfig {
    ConverterConfig::default().with_output_dir(root.join("single_TC"))
}

/// Batch config reading `<root>/bdeck` and writing into `<root>/single_TC`
pub fn batch_config(root: &Path) -> BatchConfig {
    let input_dir = root.join("bdeck");
    std::fs::create_dir_all(&input_dir).unwrap();
    BatchConfig::new(input_dir, converter_config(root))
}
