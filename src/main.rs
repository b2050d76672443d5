mod bot;
mod command;
mod config;
mod data;
mod dispatch;
mod error;
mod gateway;
mod model;
mod registry;
mod service;
mod startup;
mod util;

use std::sync::Arc;

use crate::{
    bot::moderation::HttpModeration,
    config::Config,
    dispatch::{context::Services, DispatchConfig, Dispatcher},
    error::AppError,
    registry::RegistryHandle,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let registry = Arc::new(RegistryHandle::new(startup::build_registry()?));
    let http = bot::start::init_http(&config);

    let services = Services::new()
        .with_database(db.clone())
        .with_moderation(Arc::new(HttpModeration::new(Arc::clone(&http))))
        .with_registry(Arc::clone(&registry));
    let dispatcher = Arc::new(Dispatcher::new(
        registry,
        services,
        DispatchConfig {
            timeout: config.dispatch_timeout,
            deferred_timeout: config.deferred_timeout,
        },
    ));

    let client = bot::start::init_bot(&config, db, http, dispatcher).await?;

    bot::start::start_bot(client).await
}
