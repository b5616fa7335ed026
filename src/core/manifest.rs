use crate::domain::model::OutputRecord;
use crate::utils::error::{ManifestError, Result};
use num_bigint::BigInt;

/// Compact JSON array, no trailing newline.
pub fn to_json(records: &[OutputRecord]) -> Result<String> {
    Ok(serde_json::to_string(records)?)
}

pub fn read_manifest(data: &[u8]) -> Result<Vec<OutputRecord>> {
    Ok(serde_json::from_slice(data)?)
}

/// Sum of all `amount` values. `line` in a reported error is the 1-based entry position.
pub fn total(records: &[OutputRecord]) -> Result<BigInt> {
    let mut sum = BigInt::from(0u8);
    for (index, record) in records.iter().enumerate() {
        let amount: BigInt = record
            .amount
            .parse()
            .map_err(|e: num_bigint::ParseBigIntError| ManifestError::Format {
                line: index as u64 + 1,
                value: record.amount.clone(),
                reason: e.to_string(),
            })?;
        sum += amount;
    }
    Ok(sum)
}
