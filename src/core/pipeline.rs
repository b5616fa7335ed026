use crate::core::amount;
use crate::core::manifest;
use crate::core::{ConfigProvider, InputRow, OutputRecord, Pipeline, Storage, TransformResult};
use crate::utils::error::{ManifestError, Result};
use num_bigint::BigInt;
use std::collections::HashMap;

pub const WALLET_COLUMN: &str = "wallet";
pub const TOKENS_COLUMN: &str = "tokens";

pub struct AllocationPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> AllocationPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

/// Reads a header-delimited table into rows keyed by column name.
///
/// Both required columns must appear in the header, even if no data rows follow.
/// Duplicate header names resolve to the last column carrying that name.
pub fn parse_rows(data: &[u8], source: &str) -> Result<Vec<InputRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(data);

    let headers = reader.headers()?.clone();
    for column in [WALLET_COLUMN, TOKENS_COLUMN] {
        if !headers.iter().any(|name| name == column) {
            return Err(ManifestError::Schema {
                column: column.to_string(),
                path: source.to_string(),
            });
        }
    }

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        // Reader 產生的紀錄一定帶位置；多行引號欄位取起始行
        let line = record.position().map_or(0, |pos| pos.line());

        // 依位置對應欄位名稱；短列缺少的欄位不放入
        let data: HashMap<String, String> = headers
            .iter()
            .zip(record.iter())
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();

        rows.push(InputRow { line, data });
    }

    Ok(rows)
}

fn required_field<'a>(row: &'a InputRow, column: &str) -> Result<&'a str> {
    row.get(column).ok_or_else(|| ManifestError::Format {
        line: row.line,
        value: String::new(),
        reason: format!("row has no '{}' field", column),
    })
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for AllocationPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<InputRow>> {
        let path = self.config.input_path();
        tracing::debug!("Reading allocation table from: {}", path);

        let data = self.storage.read_file(path).await?;
        tracing::debug!("Read {} bytes", data.len());

        parse_rows(&data, path)
    }

    async fn transform(&self, rows: Vec<InputRow>) -> Result<TransformResult> {
        let rows_read = rows.len();
        let mut records = Vec::new();
        let mut rows_skipped = 0;
        let mut token_total = BigInt::from(0u8);

        for row in rows {
            let raw = required_field(&row, TOKENS_COLUMN)?;
            let tokens = amount::parse_tokens(raw).map_err(|e| ManifestError::Format {
                line: row.line,
                value: raw.to_string(),
                reason: e.to_string(),
            })?;

            if !amount::is_allocatable(&tokens) {
                tracing::debug!("Skipping line {}: non-positive allocation {}", row.line, tokens);
                rows_skipped += 1;
                continue;
            }

            let wallet = required_field(&row, WALLET_COLUMN)?;
            let scaled = amount::scale(&tokens);
            token_total += &scaled;

            records.push(OutputRecord {
                account: wallet.to_string(),
                amount: scaled.to_string(),
            });
        }

        Ok(TransformResult {
            records,
            rows_read,
            rows_skipped,
            token_total,
        })
    }

    async fn load(&self, result: &TransformResult) -> Result<String> {
        let output_path = self.config.output_path();
        let json = manifest::to_json(&result.records)?;

        tracing::debug!("Writing manifest ({} bytes) to: {}", json.len(), output_path);
        self.storage.write_file(&output_path, json.as_bytes()).await?;

        Ok(output_path)
    }
}
