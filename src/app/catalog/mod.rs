//! 商品目录：模型、默认数据与存储

pub mod model;
pub mod store;

pub use model::{default_catalog, NewProduct, Product};
pub use store::CatalogStore;
