use crate::prelude::*;

/// A two-cell table row: name with the description below it, then the price.
pub struct ProductRow;

impl ProductRow {

    pub fn from_product(product: &Product) -> Element {
        let mut row = Element::new("tr");

        let details = row.append_child(Element::new("td"));
        details.append_text(product.product_name.as_str());
        details.append_child(Element::new("br"));
        details.append_child(Element::new("p").with_text(product.description.as_str()));

        row.append_child(Element::new("td").with_text(product.price.to_string()));
        row
    }
}
