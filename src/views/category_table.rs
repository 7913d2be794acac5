use super::ProductRow;
use crate::prelude::*;

/// A titled table for one category:
/// `div.table-container > h1.headers#header-<anchor> + hr + table#<anchor>`.
pub struct CategoryTable;

impl CategoryTable {

    /// Appends the table for `category` into `container` and fills it with
    /// one row per product, in order.
    pub fn append_to<'a>(container: &'a mut Element, category: &str, products: &[Product]) -> &'a mut Element {
        let anchor = Anchor::from_category(category);

        let table_container = container.append_child(Element::new("div").with_class("table-container"));
        table_container.append_child(
            Element::new("h1")
                .with_class("headers")
                .with_id(anchor.header_id())
                .with_text(category),
        );
        table_container.append_child(Element::new("hr"));

        let table = table_container.append_child(Element::new("table").with_id(anchor.as_str()));
        for product in products {
            Self::append_row(table, ProductRow::from_product(product));
        }

        table
    }

    pub fn append_row(table: &mut Element, row: Element) {
        table.append_child(row);
    }
}
