pub mod prelude;

pub mod ideas;
pub mod users;
