use actix_web::middleware::{self, TrailingSlash};
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use anyhow::Context;
use inventory_api::config::Config;
use inventory_api::services::database;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env().context("Invalid configuration")?;

    let pool = database::connect(&config.database)
        .await
        .with_context(|| format!("Failed to connect to {}", config.database.url))?;
    database::create_schema(&pool)
        .await
        .context("Failed to create the products table")?;

    let mediator = inventory_api::create_mediator(pool);

    log::info!("Listening on {}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::NormalizePath::new(TrailingSlash::Trim))
            .wrap(middleware::Logger::default())
            .app_data(Data::new(mediator.clone()))
            .configure(inventory_api::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}
