use mongodb::bson::{doc, Bson, Document};
use serde::Deserialize;
use serde_json::Value;

use crate::models::json_to_bson;

/// The fields a product update overwrites, in the order they are written.
pub const PRODUCT_FIELDS: [&str; 7] = [
    "image",
    "name",
    "brand",
    "type",
    "price",
    "description",
    "ratings",
];

/// Replacement field set for `PUT /products/:id`.
///
/// Every field is optional on the wire, but an update always writes all
/// seven: anything missing is stored as `null`. Values are kept as raw JSON
/// since products carry no schema.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductUpdate {
    pub image: Option<Value>,
    pub name: Option<Value>,
    pub brand: Option<Value>,
    #[serde(rename = "type")]
    pub product_type: Option<Value>,
    pub price: Option<Value>,
    pub description: Option<Value>,
    pub ratings: Option<Value>,
}

impl ProductUpdate {
    pub fn into_set_fields(self) -> Document {
        doc! {
            "image": self.image.map_or(Bson::Null, json_to_bson),
            "name": self.name.map_or(Bson::Null, json_to_bson),
            "brand": self.brand.map_or(Bson::Null, json_to_bson),
            "type": self.product_type.map_or(Bson::Null, json_to_bson),
            "price": self.price.map_or(Bson::Null, json_to_bson),
            "description": self.description.map_or(Bson::Null, json_to_bson),
            "ratings": self.ratings.map_or(Bson::Null, json_to_bson),
        }
    }
}
