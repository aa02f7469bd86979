pub mod idea;
pub mod user;
