use claim_check::DocumentSource;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "claim-check")]
#[command(about = "Checks numeric and date claims in a document against their linked sources")]
#[command(version)]
pub struct Args {
    /// Document to check (export-service URL or local HTML file)
    pub source: String,

    /// Source type (doc, file)
    #[arg(short, long, value_enum, default_value_t = SourceTypeArg::Doc)]
    pub type_: SourceTypeArg,

    /// Path to a JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Per-fetch timeout in seconds (overrides the config file)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Pretty-print the JSON report
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SourceTypeArg {
    Doc,
    File,
}

/// Convert from CLI argument source type to internal document source
pub fn convert_source(arg_type: SourceTypeArg, source: &str) -> DocumentSource {
    match arg_type {
        SourceTypeArg::Doc => DocumentSource::Doc(source.to_string()),
        SourceTypeArg::File => DocumentSource::File(PathBuf::from(source)),
    }
}
