mod cli;
mod config;
mod handlers;
mod http;
mod index;
mod init;
mod loader;
mod models;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use clap::Parser;

use cli::Commands;
use handlers::{Consts, Ctx};
use index::IndexHandle;

#[tokio::main]
async fn main() {
    init::init_logger();

    let cli = cli::Cli::parse();

    // Generate a new config file. This is the only command that needs no config.
    if let Some(Commands::NewConfig { path }) = &cli.command {
        match config::generate_sample(path) {
            Ok(_) => {
                log::info!("config file generated: {}", path.display());
            }
            Err(e) => {
                log::error!("error generating config: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    // Load config.
    let config = config::load_all(&cli.config);
    let data_path = init::data_path(&cli.data, &config);

    // Build the index. Everything below needs it.
    let index = init::init_index(&data_path, &config);

    match cli.command {
        // Print index size and exit.
        Some(Commands::Check) => {
            log::info!(
                "ok: {} records, {} keys",
                index.num_records(),
                index.num_entries()
            );
            return;
        }

        // Run a single query and print the results.
        Some(Commands::Query { prefix }) => {
            let result = match index.top_k(&prefix) {
                Ok(r) => r,
                Err(e) => {
                    log::error!("{}", e);
                    std::process::exit(1);
                }
            };

            match serde_json::to_string_pretty(&models::QueryResults { result }) {
                Ok(s) => println!("{}", s),
                Err(e) => {
                    log::error!("error encoding results: {}", e);
                    std::process::exit(1);
                }
            }
            return;
        }

        Some(Commands::NewConfig { .. }) | None => {}
    }

    // Setup the global app context used in HTTP handlers.
    let ctx = Arc::new(Ctx {
        index: IndexHandle::new(index),
        data_path,
        data: config.data.clone(),
        consts: Consts {
            admin_username: config.app.admin_username,
            admin_password: config.app.admin_password,
            version: env!("VERSION").to_string(),
        },
    });

    // Start the HTTP server.
    let routes = http::init_handlers(ctx);
    let addr = if config.app.address.is_empty() {
        "127.0.0.1:5000".to_string()
    } else {
        config.app.address
    };

    log::info!("starting server on {}", addr);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            log::error!("error listening on {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, routes).await {
        log::error!("server error: {}", e);
        std::process::exit(1);
    }
}
