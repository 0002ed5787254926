//! Loads a JSON directory fixture into the configured database.
//!
//! Usage: `seed <fixture.json>`

use std::env;
use std::fs;

use dotenvy::dotenv;

use pushkind_backoffice::db::{establish_connection_pool, run_migrations};
use pushkind_backoffice::dto::fixtures::DirectoryFixture;
use pushkind_backoffice::models::config::ServerConfig;
use pushkind_backoffice::repository::DieselRepository;
use pushkind_backoffice::services::fixtures::load_fixture;

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let Some(path) = env::args().nth(1) else {
        log::error!("Usage: seed <fixture.json>");
        std::process::exit(2);
    };

    let server_config = match ServerConfig::load() {
        Ok(server_config) => server_config,
        Err(err) => {
            log::error!("Error loading server config: {err}");
            std::process::exit(1);
        }
    };

    let fixture: DirectoryFixture = match fs::read_to_string(&path)
        .map_err(|e| e.to_string())
        .and_then(|raw| serde_json::from_str(&raw).map_err(|e| e.to_string()))
    {
        Ok(fixture) => fixture,
        Err(e) => {
            log::error!("Failed to read fixture {path}: {e}");
            std::process::exit(1);
        }
    };

    let pool = match establish_connection_pool(&server_config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_migrations(&pool) {
        log::error!("Failed to migrate database: {e}");
        std::process::exit(1);
    }

    let repo = DieselRepository::new(pool);
    match load_fixture(&repo, &fixture) {
        Ok(summary) => log::info!(
            "Loaded {} customer categories, {} departments, {} customers, {} employees, {} suppliers",
            summary.customer_categories,
            summary.departments,
            summary.customers,
            summary.employees,
            summary.suppliers
        ),
        Err(e) => {
            log::error!("Failed to load fixture {path}: {e}");
            std::process::exit(1);
        }
    }
}
