use clap::Parser;
use todo_etl::utils::{logger, validation::Validate};
use todo_etl::{Config, LocalStorage, SystemClock, TodoService};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();

    logger::init_logger(config.verbose);

    tracing::info!("Starting todo-etl");
    if config.verbose {
        tracing::debug!("config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        eprintln!("❌ Configuration validation failed: {}", e);
        std::process::exit(1);
    }

    let storage = LocalStorage::new(config.storage_dir.clone());
    let service = TodoService::new(&config, storage, SystemClock);

    match service.run().await {
        Ok(report) => {
            if report.fetch_succeeded {
                tracing::info!(
                    "run finished: {} written, {} skipped",
                    report.written,
                    report.skipped
                );
            }
        }
        Err(e) => {
            tracing::error!("run failed: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
