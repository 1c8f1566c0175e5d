extern crate actix_web;
extern crate anyhow;
extern crate chrono;
extern crate dotenv;
extern crate env_logger;
extern crate itertools;
extern crate log;
extern crate serde;
extern crate serde_json;
extern crate sqlx;
extern crate thiserror;
extern crate uuid;

mod config;
mod core;
mod database;
mod error;
mod handlers;
mod impls;
pub mod response;

use actix_web::web::{get, post, route, scope, Data, JsonConfig};
use actix_web::HttpServer;
use config::Config;
use crate::core::services::answer::resolve_option_column;
use database::sqlx::PgSqlxManager;
use impls::journal::file::FileJournal;
use log::info;
use sqlx::postgres::PgPoolOptions;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    config::load_dotenv()?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stdout)
        .init();
    let config = Config::from_env()?;
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;
    let manager = PgSqlxManager::new(pool);
    let column = {
        let mut db = manager.acquire().await?;
        resolve_option_column(&mut db, config.option_column.as_deref()).await?
    };
    info!("option answers are written to responses.{}", column);

    let manager = Data::new(manager);
    let column = Data::new(column);
    let journal = Data::new(FileJournal::new(&config.submission_log));
    info!("listening on {}:{}", config.host, config.port);
    HttpServer::new(move || {
        actix_web::App::new()
            .wrap(actix_web::middleware::Logger::default())
            .app_data(JsonConfig::default().error_handler(handlers::json_error))
            .app_data(manager.clone())
            .app_data(column.clone())
            .app_data(journal.clone())
            .route("/", get().to(handlers::index))
            .service(
                scope("api")
                    .route("login", post().to(handlers::user::login))
                    .route("areas", get().to(handlers::area::areas))
                    .route("wards/{area_id}", get().to(handlers::area::wards))
                    .route("surveys/{survey_id}/questions", get().to(handlers::survey::questions))
                    .route("responses", post().to(handlers::answer::submit::<FileJournal>))
                    .route("test-db", get().to(handlers::test_db))
                    .route("test-tables", get().to(handlers::test_tables))
                    .route("test-users", get().to(handlers::test_users)),
            )
            .default_service(route().to(handlers::not_found))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;
    Ok(())
}
