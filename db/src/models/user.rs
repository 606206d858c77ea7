use chrono::NaiveDateTime;
use diesel::sqlite::SqliteConnection;
use diesel::{self, Connection, ExpressionMethods, QueryDsl, RunQueryDsl};
use serde::{Deserialize, Serialize};

use errors::Error;

use crate::schema::users;

#[derive(Clone, Debug, Deserialize, PartialEq, Queryable, Serialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Insertable)]
#[table_name = "users"]
pub struct NewUser {
    pub name: String,
}

impl User {
    pub fn create(connection: &SqliteConnection, name: String) -> Result<User, Error> {
        use crate::schema::users::dsl::{id, users as users_table};

        connection.transaction::<User, Error, _>(|| {
            diesel::insert_into(users_table)
                .values(NewUser { name })
                .execute(connection)?;
            let user = users_table.order(id.desc()).first::<User>(connection)?;

            Ok(user)
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{get_conn, new_memory_pool};

    use super::User;

    #[test]
    fn test_create_user() {
        let pool = new_memory_pool().unwrap();
        let conn = get_conn(&pool).unwrap();

        let user = User::create(&conn, "agmcleod".to_string()).unwrap();
        assert_eq!(user.name, "agmcleod");
        assert!(user.id > 0);
    }
}
