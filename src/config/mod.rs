/// Database connection and schema management
pub mod database;

/// Application settings loading from config.toml
pub mod settings;
