use clap::Parser;
use log::info;
use sf_key_checker::{
    client::{ClientConfig, DEFAULT_BASE_URL},
    console::{check_once, run_console, HELP},
    init_logging, Session,
};
use tokio::io::BufReader;

/// Batch-check SiliconFlow API keys against the user info endpoint
#[derive(Debug, Parser)]
#[command(name = "sf_key_checker", version)]
struct Cli {
    /// Keys to add before starting
    keys: Vec<String>,

    /// Check the given keys once, print the results and exit
    #[arg(long)]
    once: bool,

    /// API base URL
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Log level (error, warn, info, debug, trace, off)
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Also write logs to this file
    #[arg(long)]
    log_file: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(&cli.log_level, cli.log_file.as_deref())?;

    let config = ClientConfig::default().with_base_url(cli.base_url);
    let session = Session::with_client(config)?;
    for key in &cli.keys {
        session.add_key(key).await;
    }
    info!("Session started with {} key(s)", session.keys().await.len());

    let mut stdout = std::io::stdout();
    if cli.once {
        return check_once(&session, &mut stdout).await;
    }

    println!("SiliconFlow Key Checker");
    println!("{}", HELP);

    let stdin = BufReader::new(tokio::io::stdin());
    run_console(&session, stdin, &mut stdout).await?;
    Ok(())
}
