use chrono::NaiveDateTime;
use diesel::sqlite::SqliteConnection;
use diesel::{self, Connection, ExpressionMethods, QueryDsl, RunQueryDsl};
use serde::{Deserialize, Serialize};

use errors::Error;

use crate::schema::reviews;

#[derive(Clone, Debug, Deserialize, PartialEq, Queryable, Serialize)]
pub struct Review {
    pub id: i32,
    pub score: i32,
    pub comment: String,
    pub game_id: i32,
    pub user_id: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Insertable)]
#[table_name = "reviews"]
pub struct NewReview {
    pub score: i32,
    pub comment: String,
    pub game_id: i32,
    pub user_id: i32,
}

impl Review {
    pub fn create(conn: &SqliteConnection, new_review: &NewReview) -> Result<Review, Error> {
        use crate::schema::reviews::dsl::{id, reviews as reviews_table};

        conn.transaction::<Review, Error, _>(|| {
            diesel::insert_into(reviews_table)
                .values(new_review)
                .execute(conn)?;
            let review = reviews_table.order(id.desc()).first::<Review>(conn)?;

            Ok(review)
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::models::{Game, NewGame, User};
    use crate::{get_conn, new_memory_pool};

    use super::{NewReview, Review};

    #[test]
    fn test_create_review() {
        let pool = new_memory_pool().unwrap();
        let conn = get_conn(&pool).unwrap();

        let game = Game::create(
            &conn,
            &NewGame {
                title: "Chess".to_string(),
                genre: "Strategy".to_string(),
                platform: "PC".to_string(),
                price: 0.0,
            },
        )
        .unwrap();
        let user = User::create(&conn, "agmcleod".to_string()).unwrap();

        let review = Review::create(
            &conn,
            &NewReview {
                score: 8,
                comment: "Timeless".to_string(),
                game_id: game.id,
                user_id: user.id,
            },
        )
        .unwrap();

        assert_eq!(review.game_id, game.id);
        assert_eq!(review.user_id, user.id);
        assert_eq!(review.score, 8);
    }
}
