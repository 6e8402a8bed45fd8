pub mod use_products;
pub mod use_push_route;

pub use use_products::use_products;
pub use use_push_route::use_push_route;
