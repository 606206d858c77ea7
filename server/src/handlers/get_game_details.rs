use actix_web::web::block;

use db::{
    models::{Game, GameDetails},
    Connection,
};
use errors::Error;

pub async fn get_game_details(
    connection: Connection,
    game_id: i32,
) -> Result<Option<GameDetails>, Error> {
    let game: Result<Option<Game>, Error> =
        block(move || Game::find_by_id(&connection, game_id)).await?;

    Ok(game?.map(GameDetails::from))
}
