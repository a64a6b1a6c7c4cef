//! Destructive database reinitialization.
//!
//! Deletes the configured store file and rebuilds it from a schema
//! definition. Meant for fresh and test environments; normal startup never
//! does this.

use crate::{
    db::schema::{reset_schema, DEFAULT_SCHEMA},
    libs::{config::Config, messages::Message},
    msg_bail_anyhow, msg_info, msg_success,
};
use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitDbArgs {
    /// Schema definition to apply instead of the bundled `schema.sql`
    #[arg(short, long, value_name = "FILE")]
    schema: Option<PathBuf>,
}

pub fn cmd(args: InitDbArgs, config: &Config) -> Result<()> {
    let schema = match &args.schema {
        Some(path) => {
            let schema = fs::read_to_string(path).with_context(|| format!("reading schema file {}", path.display()))?;
            if schema.trim().is_empty() {
                msg_bail_anyhow!(Message::SchemaFileEmpty(path.display().to_string()));
            }
            msg_info!(Message::SchemaFileRead(path.display().to_string()));
            schema
        }
        None => DEFAULT_SCHEMA.to_string(),
    };

    reset_schema(&config.database, &schema)?;
    msg_success!(Message::SchemaReset(config.database.display().to_string()));

    Ok(())
}
