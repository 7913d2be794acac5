use super::{Anchor, Product};
use crate::ordered_map::OrderedMap;

/// Products grouped by category. Categories keep the order in which they
/// first appear in the product list and products keep their relative order
/// inside each category.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    groups: OrderedMap<String, Vec<Product>>,
}

impl Catalog {

    pub fn from_products(products: impl IntoIterator<Item = Product>) -> Self {
        let mut groups: OrderedMap<String, Vec<Product>> = OrderedMap::new();
        for product in products {
            groups.get_or_default(product.category.clone()).push(product);
        }

        Self { groups }
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    pub fn groups(&self) -> impl Iterator<Item = (&str, &[Product])> {
        self.groups
            .iter()
            .map(|(category, products)| (category.as_str(), products.as_slice()))
    }

    pub fn anchors(&self) -> impl Iterator<Item = (&str, Anchor)> {
        self.categories().map(|category| (category, Anchor::from_category(category)))
    }

    pub const fn category_count(&self) -> usize {
        self.groups.len()
    }

    pub fn product_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub const fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::Catalog;
    use crate::models::Product;

    fn product(name: &str, category: &str) -> Product {
        Product::new(name, "", 1_u64, category)
    }

    #[test]
    fn groups_by_first_seen_category() {
        let catalog = Catalog::from_products([
            product("Cola", "Drinks"),
            product("Burger", "Food"),
            product("Water", "Drinks"),
            product("Cake", "Dessert"),
        ]);

        let categories: Vec<_> = catalog.categories().collect();
        assert_eq!(categories, ["Drinks", "Food", "Dessert"]);

        let (_, drinks) = catalog.groups().next().unwrap();
        let drinks: Vec<_> = drinks
            .iter()
            .map(|product| product.product_name.as_str())
            .collect();
        assert_eq!(drinks, ["Cola", "Water"]);
        assert_eq!(catalog.product_count(), 4);
    }

    #[test]
    fn empty_list_gives_empty_catalog() {
        let catalog = Catalog::from_products(Vec::new());
        assert!(catalog.is_empty());
        assert_eq!(catalog.category_count(), 0);
        assert_eq!(catalog.groups().count(), 0);
    }

    #[test]
    fn categories_are_case_sensitive() {
        let catalog = Catalog::from_products([product("a", "food"), product("b", "Food")]);
        assert_eq!(catalog.category_count(), 2);
    }
}
