pub mod handlers;
pub mod models;
pub mod repository;

pub use handlers::{create_product, get_product, list_products, update_product};
pub use models::{ProductUpdate, PRODUCT_FIELDS};
pub use repository::ProductRepository;
