use dotenv::dotenv;
use taskboard::commands::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine.
    let _ = dotenv();

    Cli::menu().await
}
