use num_bigint::BigInt;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One data row of the allocation table, keyed by header column name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRow {
    /// 1-based line number in the source file.
    pub line: u64,
    pub data: HashMap<String, String>,
}

impl InputRow {
    pub fn get(&self, column: &str) -> Option<&str> {
        self.data.get(column).map(String::as_str)
    }
}

/// A manifest entry. `amount` is the token count already scaled to 18 decimals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputRecord {
    pub account: String,
    pub amount: String,
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub records: Vec<OutputRecord>,
    pub rows_read: usize,
    pub rows_skipped: usize,
    pub token_total: BigInt,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    pub rows_read: usize,
    pub records_written: usize,
    pub rows_skipped: usize,
    pub token_total: String,
    pub output_path: String,
}
