use crate::prelude::*;

/// `a[href=#header-<anchor>] > button` with the category upper-cased.
pub struct OptionButton;

impl OptionButton {

    pub fn from_category(category: &str) -> Element {
        let anchor = Anchor::from_category(category);
        let mut link = Element::new("a").with_attribute("href", anchor.header_fragment());
        link.append_child(Element::new("button").with_text(category.to_uppercase()));
        link
    }
}

/// Navigation buttons, one per distinct category in first-seen order.
pub struct CategoryOptions;

impl CategoryOptions {

    pub fn render(root: &mut Element, catalog: &Catalog) -> usize {
        let mut count = 0;
        for category in catalog.categories() {
            root.append_child(OptionButton::from_category(category));
            count += 1;
        }

        tracing::debug!(buttons = count, "rendered category options");
        count
    }
}
