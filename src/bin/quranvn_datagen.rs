use std::process::ExitCode;

use camino::Utf8PathBuf;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use quranvn_datagen::app::{App, DEFAULT_OUTPUT_PATH};
use quranvn_datagen::error::DatagenError;
use quranvn_datagen::fetch::HttpSourceClient;

#[derive(Parser)]
#[command(name = "quranvn-datagen")]
#[command(about = "Generate the bundled bilingual Quran dataset (Arabic + Vietnamese)")]
#[command(version, author)]
struct Cli {
    /// Where to write the consolidated JSON document.
    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    output: Utf8PathBuf,
}

fn main() -> ExitCode {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn run() -> Result<(), DatagenError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = HttpSourceClient::new()?;
    let app = App::new(client);
    let result = app.generate(&cli.output)?;
    println!("Wrote {}", result.output_path);
    Ok(())
}
