use tracing_subscriber::EnvFilter;

use crate::{command::BuiltinCommands, config::Config, error::AppError, registry::Registry};

const DEFAULT_LOG_FILTER: &str = "info,courier=debug";

/// Installs the global tracing subscriber.
///
/// The filter is read from `RUST_LOG` and falls back to `info` with debug output
/// for this crate.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the bot can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the initial command registry from the built-in commands.
///
/// # Returns
/// - `Ok(Registry)` - Every built-in descriptor is valid
/// - `Err(AppError::RegistryErr)` - A descriptor failed validation; the bot must not start
pub fn build_registry() -> Result<Registry, AppError> {
    let registry = Registry::from_source(&BuiltinCommands)?;

    tracing::info!("Loaded {} commands", registry.len());

    Ok(registry)
}
