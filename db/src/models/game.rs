use chrono::NaiveDateTime;
use diesel::sqlite::SqliteConnection;
use diesel::{self, Connection, OptionalExtension, QueryDsl, RunQueryDsl};
use serde::{Deserialize, Serialize};

use errors::Error;

use crate::schema::games;

#[derive(Clone, Debug, Deserialize, PartialEq, Queryable, Serialize)]
pub struct Game {
    pub id: i32,
    pub title: String,
    pub genre: String,
    pub platform: String,
    pub price: f64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Insertable)]
#[table_name = "games"]
pub struct NewGame {
    pub title: String,
    pub genre: String,
    pub platform: String,
    pub price: f64,
}

/// The public shape of a game. Both the listing and the single record
/// endpoints serialize through this, so the keys are always exactly
/// `title`, `genre`, `platform` and `price`.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct GameDetails {
    pub title: String,
    pub genre: String,
    pub platform: String,
    pub price: f64,
}

impl From<Game> for GameDetails {
    fn from(game: Game) -> Self {
        GameDetails {
            title: game.title,
            genre: game.genre,
            platform: game.platform,
            price: game.price,
        }
    }
}

impl From<&Game> for GameDetails {
    fn from(game: &Game) -> Self {
        GameDetails {
            title: game.title.clone(),
            genre: game.genre.clone(),
            platform: game.platform.clone(),
            price: game.price,
        }
    }
}

impl Game {
    /// Loads at most `limit` games in whatever order the store returns them.
    pub fn find_limited(conn: &SqliteConnection, limit: u32) -> Result<Vec<Game>, Error> {
        use crate::schema::games::dsl::games;

        let results = games.limit(i64::from(limit)).load::<Game>(conn)?;

        Ok(results)
    }

    pub fn find_by_id(conn: &SqliteConnection, game_id: i32) -> Result<Option<Game>, Error> {
        use crate::schema::games::dsl::games;

        let game = games.find(game_id).first::<Game>(conn).optional()?;

        Ok(game)
    }

    pub fn create(conn: &SqliteConnection, new_game: &NewGame) -> Result<Game, Error> {
        use crate::schema::games::dsl::{games, id};
        use diesel::ExpressionMethods;

        conn.transaction::<Game, Error, _>(|| {
            diesel::insert_into(games).values(new_game).execute(conn)?;
            let game = games.order(id.desc()).first::<Game>(conn)?;

            Ok(game)
        })
    }
}
