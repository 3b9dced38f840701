pub mod handlers;
pub mod repository;

pub use handlers::{create_user, list_users};
pub use repository::UserRepository;
