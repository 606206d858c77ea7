use actix_web::web::block;

use db::{
    models::{Game, GameDetails},
    Connection,
};
use errors::Error;

/// Row cap for the games listing.
pub const GAMES_LISTING_LIMIT: u32 = 10;

pub async fn list_game_details(connection: Connection) -> Result<Vec<GameDetails>, Error> {
    let games: Result<Vec<Game>, Error> =
        block(move || Game::find_limited(&connection, GAMES_LISTING_LIMIT)).await?;

    Ok(games?.into_iter().map(GameDetails::from).collect())
}
