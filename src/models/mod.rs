mod anchor;
mod catalog;
mod price;
mod product;

pub use self::anchor::Anchor;
pub use self::catalog::Catalog;
pub use self::price::Price;
pub use self::product::Product;
