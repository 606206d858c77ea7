table! {
    games (id) {
        id -> Integer,
        title -> Text,
        genre -> Text,
        platform -> Text,
        price -> Double,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

table! {
    reviews (id) {
        id -> Integer,
        score -> Integer,
        comment -> Text,
        game_id -> Integer,
        user_id -> Integer,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

table! {
    users (id) {
        id -> Integer,
        name -> Text,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

joinable!(reviews -> games (game_id));
joinable!(reviews -> users (user_id));

allow_tables_to_appear_in_same_query!(
    games,
    reviews,
    users,
);
