use airdrop_manifest::utils::{logger, validation::Validate};
use airdrop_manifest::{AllocationPipeline, CliConfig, EtlEngine, LocalStorage, ManifestError};
use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger();

    tracing::debug!("CLI config: {:?}", config);

    // 驗證參數
    if let Err(e) = config.validate() {
        fail(e);
    }

    let pipeline = AllocationPipeline::new(LocalStorage::new(), config);
    let engine = EtlEngine::new(pipeline);

    match engine.run().await {
        Ok(report) => {
            tracing::info!(
                "✅ Wrote {} of {} rows to {} (total amount {})",
                report.records_written,
                report.rows_read,
                report.output_path,
                report.token_total
            );
        }
        Err(e) => fail(e),
    }
}

fn fail(e: ManifestError) -> ! {
    tracing::error!("❌ Conversion failed: {} (Category: {:?})", e, e.category());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    std::process::exit(e.exit_code());
}
