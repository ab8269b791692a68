pub mod config;
pub mod controllers;
pub mod db;
pub mod models;
pub mod ui;

use std::sync::Arc;

use config::Config;
use db::Database;

pub struct AppState {
    pub db: Arc<Database>,
    pub config: Config,
}
