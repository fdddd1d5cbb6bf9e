use std::path::{Path, PathBuf};

use crate::{index::PrefixIndex, loader, models::Config};

const DEFAULT_DATA_PATH: &str = "data.csv";

/// Initialize logger.
pub fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_env("RUST_LOG")
        .format(|buf, record| {
            use std::io::Write;
            let level = if record.level() != log::Level::Info {
                format!("[{}] ", record.level())
            } else {
                String::new()
            };
            writeln!(
                buf,
                "{} {}:{} {}{}",
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                level,
                record.args()
            )
        })
        .init();
}

/// Resolve the dataset path: the --data flag wins over the config file.
pub fn data_path(flag: &Option<PathBuf>, config: &Config) -> PathBuf {
    match flag {
        Some(p) => p.clone(),
        None if config.data.path.is_empty() => PathBuf::from(DEFAULT_DATA_PATH),
        None => PathBuf::from(&config.data.path),
    }
}

/// Load the dataset and build the index, exiting on failure.
pub fn init_index(path: &Path, config: &Config) -> PrefixIndex {
    if !path.exists() {
        log::error!("data file '{}' not found", path.display());
        std::process::exit(1);
    }

    match loader::load_index(path, &config.data, config.index_options()) {
        Ok(idx) => idx,
        Err(e) => {
            log::error!("error building index from {}: {}", path.display(), e);
            std::process::exit(1);
        }
    }
}
