use std::path::Path;

use clap::Parser;
use config::{Config, Environment, File};
use minidb::engine::Executor;
use minidb::storage::Storage;
use minidb::shell;
use serde::Deserialize;

/// minidb interactive shell
#[derive(Parser, Debug)]
#[command(name = "minidb")]
#[command(about = "Minimal schema-enforcing record store", long_about = None)]
struct Args {
    /// Directory holding the metadata file and table data files
    #[arg(short, long)]
    data_dir: Option<String>,

    /// Skip y/n confirmation before drop_table and delete
    #[arg(long)]
    no_confirm: bool,
}

#[derive(Debug, Deserialize)]
struct Settings {
    #[serde(default = "default_data_dir")]
    data_dir: String,
    #[serde(default = "default_confirm")]
    confirm: bool,
}

fn default_data_dir() -> String {
    "./data".to_string()
}

const fn default_confirm() -> bool {
    true
}

impl Settings {
    /// Load configuration with priority: CLI args > ENV > config file > defaults
    fn load(args: &Args) -> Self {
        let config_paths = ["/etc/minidb/minidb.toml", "./minidb.toml"];

        let mut builder = Config::builder();
        for path in &config_paths {
            if Path::new(path).exists() {
                builder = builder.add_source(File::with_name(path));
                break;
            }
        }
        builder = builder.add_source(Environment::with_prefix("MINIDB"));

        let base = builder
            .build()
            .ok()
            .and_then(|c| c.try_deserialize::<Self>().ok())
            .unwrap_or_else(|| Self {
                data_dir: default_data_dir(),
                confirm: default_confirm(),
            });

        Self {
            data_dir: args.data_dir.clone().unwrap_or(base.data_dir),
            confirm: if args.no_confirm { false } else { base.confirm },
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let settings = Settings::load(&args);

    let storage = Storage::new(&settings.data_dir)?;
    let catalog = storage.load_schema()?;
    let executor = Executor::new(storage);

    shell::run(executor, catalog, settings.confirm)
}
