pub use super::ideas::Entity as Ideas;
pub use super::users::Entity as Users;
