pub mod idea_service;
pub mod idea_service_impl;
pub use idea_service::{IdeaError, IdeaService};
pub use idea_service_impl::SeaOrmIdeaService;

pub mod user_service;
pub mod user_service_impl;
pub use user_service::{UserError, UserService};
pub use user_service_impl::SeaOrmUserService;
