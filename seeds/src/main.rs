#[macro_use]
extern crate log;

use std::env;
use std::process;

use diesel::sqlite::SqliteConnection;
use diesel::{self, Connection, RunQueryDsl};
use dotenv::dotenv;
use env_logger::Env;

use db::{
    get_conn,
    models::{Game, NewGame, NewReview, Review, User},
    pool_for_url,
    schema::{games, reviews, users},
};
use errors::Error;

const GAMES: &[(&str, &str, &str, f64)] = &[
    ("Chess", "Strategy", "PC", 0.0),
    ("Hollow Knight", "Metroidvania", "Switch", 14.99),
    ("Stardew Valley", "Simulation", "PC", 14.99),
    ("Celeste", "Platformer", "PC", 19.99),
    ("Hades", "Roguelike", "PlayStation 5", 24.99),
    ("Tetris", "Puzzle", "Game Boy", 29.5),
    ("Portal 2", "Puzzle", "Xbox 360", 9.99),
    ("Into the Breach", "Strategy", "Switch", 14.99),
    ("Outer Wilds", "Adventure", "PC", 24.99),
    ("Disco Elysium", "RPG", "PC", 39.99),
    ("Slay the Spire", "Deckbuilder", "PC", 24.99),
    ("Super Mario Odyssey", "Platformer", "Switch", 59.99),
];

const USERS: &[&str] = &["agmcleod", "ada", "grace", "linus"];

const COMMENTS: &[&str] = &[
    "Could play this forever",
    "Solid, but the ending dragged",
    "Not for me",
    "Worth every penny",
];

fn seed(conn: &SqliteConnection) -> Result<(), Error> {
    conn.transaction::<(), Error, _>(|| {
        diesel::delete(reviews::table).execute(conn)?;
        diesel::delete(games::table).execute(conn)?;
        diesel::delete(users::table).execute(conn)?;

        let mut seeded_users = Vec::new();
        for name in USERS {
            seeded_users.push(User::create(conn, name.to_string())?);
        }

        let mut seeded_games = Vec::new();
        for (title, genre, platform, price) in GAMES {
            seeded_games.push(Game::create(
                conn,
                &NewGame {
                    title: title.to_string(),
                    genre: genre.to_string(),
                    platform: platform.to_string(),
                    price: *price,
                },
            )?);
        }

        let mut review_count = 0;
        for (index, game) in seeded_games.iter().enumerate() {
            let user = &seeded_users[index % seeded_users.len()];
            Review::create(
                conn,
                &NewReview {
                    score: (index % 10) as i32 + 1,
                    comment: COMMENTS[index % COMMENTS.len()].to_string(),
                    game_id: game.id,
                    user_id: user.id,
                },
            )?;
            review_count += 1;
        }

        info!(
            "Seeded {} users, {} games, {} reviews",
            seeded_users.len(),
            seeded_games.len(),
            review_count
        );

        Ok(())
    })
}

fn run() -> Result<(), Error> {
    let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| "app.db".to_string());
    info!("Seeding {}", database_url);

    let pool = pool_for_url(&database_url)?;
    let conn = get_conn(&pool)?;

    seed(&conn)
}

fn main() {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        error!("Seeding failed - {}", err);
        process::exit(1);
    }
}
