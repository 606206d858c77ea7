use actix_web::{web::Data, HttpResponse};

use db::{get_conn, DbPool};
use errors::Error;

use crate::config::Config;
use crate::handlers::list_game_details;
use crate::routes::json_response;

pub async fn get_all(pool: Data<DbPool>, config: Data<Config>) -> Result<HttpResponse, Error> {
    let connection = get_conn(&pool)?;
    let games = list_game_details(connection).await?;
    debug!("Listing {} games", games.len());

    json_response(&config, &games)
}
