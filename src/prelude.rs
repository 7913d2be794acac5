pub use anyhow::{Context, Result, bail};

pub use crate::dom::Element;
pub use crate::models::{Anchor, Catalog, Product};
