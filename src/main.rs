use std::{fs::File, io::Write, path::PathBuf, time::Duration};

use anyhow::Result;
use clap::Parser;
use quote_summary::{api::nasdaq, app::summarize_ticker, models::SummaryRecord};

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// Ticker symbols to summarize (e.g. AAPL TSLA).
    #[clap(required = true)]
    tickers: Vec<String>,

    /// Append each summary record to this file.
    #[clap(short, long)]
    output: Option<PathBuf>,

    /// Request timeout in seconds.
    #[clap(long, default_value_t = nasdaq::DEFAULT_TIMEOUT.as_secs())]
    timeout: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let client = nasdaq::build_client(Duration::from_secs(args.timeout))?;

    let mut output = match &args.output {
        Some(path) => Some(File::create(path)?),
        None => None,
    };

    for symbol in &args.tickers {
        println!("Retrieving data for {}...", symbol.to_uppercase());

        let record = SummaryRecord::from(summarize_ticker(symbol, &client).await);
        let json = serde_json::to_string_pretty(&record)?;
        println!("{}", json);

        if let Some(file) = output.as_mut() {
            write!(file, "{},\n\n", json)?;
        }
    }

    Ok(())
}
