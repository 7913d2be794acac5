use super::CategoryTable;
use crate::constants::{CONTAINER_ID_PREFIX, TABLES_PER_CONTAINER};
use crate::prelude::*;

/// What a menu render appended.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuSummary {
    pub containers: usize,
    pub tables: usize,
    pub rows: usize,
}

/// Lays category tables out two per `div.two-tables-container`, numbering
/// the containers `tables-1`, `tables-2`, ...
pub struct MenuTables;

impl MenuTables {

    pub fn render(root: &mut Element, catalog: &Catalog) -> MenuSummary {
        let groups: Vec<_> = catalog.groups().collect();
        let mut summary = MenuSummary::default();

        for (index, pair) in groups.chunks(TABLES_PER_CONTAINER).enumerate() {
            let container = root.append_child(Self::container(index + 1));
            summary.containers += 1;

            for (category, products) in pair {
                CategoryTable::append_to(container, category, products);
                summary.tables += 1;
                summary.rows += products.len();
            }
        }

        tracing::debug!(
            containers = summary.containers,
            tables = summary.tables,
            rows = summary.rows,
            "rendered menu tables"
        );

        summary
    }

    fn container(number: usize) -> Element {
        Element::new("div")
            .with_class("two-tables-container")
            .with_id(format!("{CONTAINER_ID_PREFIX}{number}"))
    }
}

#[cfg(test)]
mod tests {
    use super::{MenuSummary, MenuTables};
    use crate::prelude::*;

    fn catalog(categories: &[&str]) -> Catalog {
        Catalog::from_products(
            categories
                .iter()
                .enumerate()
                .map(|(index, category)| Product::new(format!("item {index}"), "", 1_u64, *category)),
        )
    }

    #[test]
    fn pairs_tables_into_numbered_containers() {
        let mut root = Element::new("div");
        let summary = MenuTables::render(&mut root, &catalog(&["A", "B", "C"]));

        assert_eq!(summary, MenuSummary { containers: 2, tables: 3, rows: 3 });

        let containers: Vec<_> = root.child_elements().collect();
        assert_eq!(containers[0].id(), Some("tables-1"));
        assert_eq!(containers[0].child_elements().count(), 2);
        assert_eq!(containers[1].id(), Some("tables-2"));
        assert_eq!(containers[1].child_elements().count(), 1);
    }

    #[test]
    fn repeated_categories_share_a_table() {
        let mut root = Element::new("div");
        let summary = MenuTables::render(&mut root, &catalog(&["Drinks", "Food", "Drinks"]));

        assert_eq!(summary, MenuSummary { containers: 1, tables: 2, rows: 3 });
        assert_eq!(root.find_by_id("Drinks").unwrap().child_elements().count(), 2);
        assert_eq!(root.find_by_id("Food").unwrap().child_elements().count(), 1);
    }

    #[test]
    fn empty_catalog_appends_nothing() {
        let mut root = Element::new("div");
        let summary = MenuTables::render(&mut root, &Catalog::default());

        assert_eq!(summary, MenuSummary::default());
        assert_eq!(root.child_count(), 0);
    }

    #[test]
    fn keeps_existing_root_content() {
        let mut root = Element::new("div").with_text("intro");
        MenuTables::render(&mut root, &catalog(&["A"]));

        assert_eq!(root.child_count(), 2);
        assert!(root.to_html().starts_with("<div>intro<div class=\"two-tables-container\""));
    }
}
