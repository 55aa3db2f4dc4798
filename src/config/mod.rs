pub mod cli;

use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_url, Validate};
use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/todos/";
pub const DEFAULT_STORAGE_DIR: &str = "storage";

#[derive(Debug, Clone, Parser)]
#[command(name = "todo-etl")]
#[command(about = "Fetches todos from a remote API and stores each one as a CSV file")]
pub struct Config {
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub api_endpoint: String,

    #[arg(long, default_value = DEFAULT_STORAGE_DIR)]
    pub storage_dir: PathBuf,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_endpoint: DEFAULT_ENDPOINT.to_string(),
            storage_dir: PathBuf::from(DEFAULT_STORAGE_DIR),
            verbose: false,
        }
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<()> {
        validate_url("api_endpoint", &self.api_endpoint)?;
        validate_path("storage_dir", &self.storage_dir)?;
        Ok(())
    }
}
