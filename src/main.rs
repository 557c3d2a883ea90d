use anyhow::Context;
use clap::Parser;
use fill_csv_ai::core::{CompletionClient, Pipeline, Storage};
use fill_csv_ai::utils::error::ErrorSeverity;
use fill_csv_ai::utils::{logger, validation::Validate};
use fill_csv_ai::{
    AppConfig, CliArgs, CsvAiPipeline, EtlEngine, EtlError, LocalStorage, OpenRouterClient,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env 優先於 logger，讓 RUST_LOG 也能寫在 .env 裡
    let dotenv_path = dotenvy::dotenv().ok();
    let args = CliArgs::parse();

    // 初始化日誌
    if args.json_logs {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("Starting fill-csv-ai");
    if let Some(path) = dotenv_path {
        tracing::debug!("Loaded environment from {}", path.display());
    }

    // 驗證配置
    let config = match AppConfig::from_env().and_then(|config| {
        config.validate()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };
    if args.verbose {
        tracing::debug!("Config: {:?}", config);
    }

    let storage = LocalStorage::new(args.workdir.clone());
    let client = OpenRouterClient::from_config(&config);
    let pipeline = CsvAiPipeline::new(storage, config, client);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - no requests will be sent and no file written");
        return perform_dry_run(&pipeline).await;
    }

    if args.monitor {
        tracing::info!("🔍 System monitoring enabled");
    }

    let engine = EtlEngine::new_with_monitoring(pipeline, args.monitor);

    match engine.run().await {
        Ok(report) => {
            tracing::info!(
                "✅ Done: {} succeeded, {} skipped, {} failed",
                report.summary.succeeded,
                report.summary.skipped,
                report.summary.failed
            );
            println!("✅ Processing complete. Output saved to {}", report.output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = exit_code_for(&e);
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn exit_code_for(e: &EtlError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

async fn perform_dry_run<S: Storage, C: CompletionClient>(
    pipeline: &CsvAiPipeline<S, C>,
) -> anyhow::Result<()> {
    let records = pipeline
        .extract()
        .await
        .with_context(|| format!("Failed to load {}", pipeline.config().input_file))?;

    let prompts = pipeline.preview_prompts(&records);
    let mut would_send = 0;
    for (index, prompt) in prompts.iter().enumerate() {
        match prompt {
            Some(prompt) => {
                would_send += 1;
                tracing::info!("Row {}: {}", index + 1, prompt);
            }
            None => tracing::info!("Row {}: skipped (no input)", index + 1),
        }
    }

    println!(
        "🔍 {} of {} records would be sent to {}",
        would_send,
        records.len(),
        pipeline.config().model
    );
    Ok(())
}
