#[cfg(test)]
#[macro_use]
extern crate diesel;
#[macro_use]
extern crate log;

use std::io;

use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;

mod config;
mod handlers;
mod routes;
mod tests;

use crate::config::Config;
use crate::routes::{not_found, routes};

#[actix_rt::main]
async fn main() -> io::Result<()> {
    dotenv().ok();

    let config = Config::from_env()
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err.to_string()))?;
    env_logger::Builder::from_env(Env::default().default_filter_or(config.log_filter())).init();

    let pool = db::pool_for_url(&config.database_url).map_err(|err| {
        error!("Failed to open database {} - {}", config.database_url, err);
        io::Error::new(io::ErrorKind::Other, err.to_string())
    })?;

    let address = (config.host.clone(), config.port);
    info!("Listening on {}:{}", address.0, address.1);

    let pool = web::Data::new(pool);
    let config = web::Data::new(config);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(pool.clone())
            .app_data(config.clone())
            .configure(routes)
            .default_service(web::route().to(not_found))
    })
    .bind(address)?
    .run()
    .await
}
