mod get_all;
mod get_by_id;

pub use self::get_all::*;
pub use self::get_by_id::*;
