use actix_web::{
    web::{Data, Path},
    HttpResponse,
};

use db::{get_conn, DbPool};
use errors::Error;

use crate::config::Config;
use crate::handlers::get_game_details;
use crate::routes::json_response;

pub async fn get_by_id(
    game_id: Path<i32>,
    pool: Data<DbPool>,
    config: Data<Config>,
) -> Result<HttpResponse, Error> {
    let game_id = game_id.into_inner();

    let connection = get_conn(&pool)?;
    match get_game_details(connection, game_id).await? {
        Some(game) => json_response(&config, &game),
        None => {
            debug!("Game {} not found", game_id);
            Err(Error::NotFound(format!("Game {} not found", game_id)))
        }
    }
}
