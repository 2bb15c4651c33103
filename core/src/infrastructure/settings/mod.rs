pub mod repositories;

pub use repositories::settings_repository::PostgresSettingsRepository;
