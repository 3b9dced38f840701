pub mod handlers;
pub mod repository;

pub use handlers::{create_brand, get_brand_by_name, list_brands};
pub use repository::{BrandRepository, BRAND_NAME_FIELD};
