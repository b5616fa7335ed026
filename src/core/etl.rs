use crate::core::{ConversionReport, Pipeline};
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<ConversionReport> {
        tracing::info!("Starting conversion...");

        // Extract
        let rows = self.pipeline.extract().await.inspect_err(|e| {
            tracing::debug!("Extract stage failed: {}", e);
        })?;
        tracing::info!("Extracted {} rows", rows.len());

        // Transform
        let result = self.pipeline.transform(rows).await.inspect_err(|e| {
            tracing::debug!("Transform stage failed: {}", e);
        })?;
        tracing::info!(
            "Transformed {} records ({} rows skipped)",
            result.records.len(),
            result.rows_skipped
        );

        // Load
        let output_path = self.pipeline.load(&result).await.inspect_err(|e| {
            tracing::debug!("Load stage failed: {}", e);
        })?;
        tracing::info!("📁 Manifest saved to: {}", output_path);

        Ok(ConversionReport {
            rows_read: result.rows_read,
            records_written: result.records.len(),
            rows_skipped: result.rows_skipped,
            token_total: result.token_total.to_string(),
            output_path,
        })
    }
}
