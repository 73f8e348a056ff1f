use clap::Parser;
use claim_check::{Report, Verifier, VerifierConfig, VerifyError};
use std::process::ExitCode;

mod args;
use args::{Args, convert_source};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();
    ::log::info!("Starting verification for: {}", args.source);

    let start_time = std::time::Instant::now();
    let report = match run(&args).await {
        Ok(report) => report,
        Err(e) => {
            ::log::error!("Verification failed: {}", e);
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    ::log::info!(
        "Verification complete - {} numeric claims, {} links, {} date claims in {:.2} seconds",
        report.numbers.len(),
        report.links.len(),
        report.dates.len(),
        start_time.elapsed().as_secs_f64()
    );

    let output = if args.pretty {
        serde_json::to_string_pretty(&report)
    } else {
        serde_json::to_string(&report)
    };
    match output {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            ::log::error!("Could not serialize report: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &Args) -> Result<Report, VerifyError> {
    let config = match &args.config {
        Some(path) => VerifierConfig::from_file(path)?,
        None => VerifierConfig::default(),
    };

    let mut verifier = Verifier::new(convert_source(args.type_, &args.source))
        .with_config(config.with_env_overrides());
    if let Some(timeout) = args.timeout {
        verifier = verifier.with_timeout(timeout);
    }
    ::log::debug!("Using configuration: {:?}", verifier.config());

    verifier.run().await
}
