use crate::config::Config;
use crate::db::connection::{init_db, Database};
use crate::responses::error_to_response;
use crate::router::handle;
use astra::Server;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod db;
mod domain;
mod errors;
mod responses;
mod router;
mod spreadsheets;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    let cfg = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {e}");
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cfg.log_level))
        .init();

    let db = Database::new(cfg.db_path.clone());

    // An empty database still renders an (empty) dashboard.
    if let Err(e) = init_db(&db) {
        error!("Database initialization failed: {e}");
        std::process::exit(1);
    }

    info!(addr = %cfg.bind_addr, workers = cfg.max_workers, db = %cfg.db_path, "starting server");

    let server = Server::bind(&cfg.bind_addr).max_workers(cfg.max_workers);

    let result = server.serve(move |req: astra::Request, _info: astra::ConnectionInfo| {
        let method = req.method().clone();
        let path = req.uri().path().to_string();
        match handle(req, &db) {
            Ok(resp) => resp,
            Err(err) => {
                warn!(%method, %path, status = err.status(), "request failed: {err}");
                error_to_response(&err)
            }
        }
    });

    if let Err(e) = result {
        error!("Server ended with error: {e}");
        std::process::exit(1);
    }

    info!("Server shut down cleanly.");
}
