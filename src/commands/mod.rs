//! Command-line entry points.

pub mod init_db;
pub mod serve;

use crate::libs::config::Config;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Serve the task API and the web page")]
    Serve(serve::ServeArgs),
    #[command(about = "Delete the database and recreate it from the schema definition")]
    InitDb(init_db::InitDbArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        let config = Config::from_env();

        match cli.command {
            Commands::Serve(args) => serve::cmd(args, config).await,
            Commands::InitDb(args) => init_db::cmd(args, &config),
        }
    }
}
