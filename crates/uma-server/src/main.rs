//! Account authentication service binary

use clap::Parser;
use uma_server::run;

/// Command line interface
#[derive(Parser, Debug)]
#[command(name = "uma")]
#[command(about = "Account authentication service with token issuance and login lockout")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    run(cli.config.as_deref()).await
}
