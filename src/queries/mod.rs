pub mod product_queries;
pub mod store_queries;
