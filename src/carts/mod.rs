pub mod handlers;
pub mod repository;

pub use handlers::{create_cart, delete_cart, list_carts};
pub use repository::CartRepository;
