mod get_game_details;
mod list_game_details;

pub use self::get_game_details::*;
pub use self::list_game_details::*;
