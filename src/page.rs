use crate::constants::{MENU_ROOT_ID, OPTIONS_ROOT_ID};
use crate::prelude::*;

/// The host document the menu is rendered into. It owns the two roots the
/// views append to: `#options` and `#all-tables-container`.
#[derive(Debug, Clone)]
pub struct Page {
    document: Element,
}

impl Page {

    pub fn new(title: &str, stylesheet: Option<&str>) -> Self {
        let mut document = Element::new("html");

        let head = document.append_child(Element::new("head"));
        head.append_child(Element::new("meta").with_attribute("charset", "utf-8"));
        head.append_child(Element::new("title").with_text(title));
        if let Some(href) = stylesheet {
            head.append_child(
                Element::new("link")
                    .with_attribute("rel", "stylesheet")
                    .with_attribute("href", href),
            );
        }

        let body = document.append_child(Element::new("body"));
        body.append_child(Element::new("nav").with_id(OPTIONS_ROOT_ID));
        body.append_child(Element::new("div").with_id(MENU_ROOT_ID));

        Self { document }
    }

    pub fn menu_root_mut(&mut self) -> Result<&mut Element> {
        self.document
            .find_by_id_mut(MENU_ROOT_ID)
            .with_context(|| format!("Page has no #{MENU_ROOT_ID} element"))
    }

    pub fn options_root_mut(&mut self) -> Result<&mut Element> {
        self.document
            .find_by_id_mut(OPTIONS_ROOT_ID)
            .with_context(|| format!("Page has no #{OPTIONS_ROOT_ID} element"))
    }

    #[cfg(test)]
    pub fn menu_root(&self) -> Option<&Element> {
        self.document.find_by_id(MENU_ROOT_ID)
    }

    #[cfg(test)]
    pub fn options_root(&self) -> Option<&Element> {
        self.document.find_by_id(OPTIONS_ROOT_ID)
    }

    pub fn to_html(&self) -> String {
        format!("<!DOCTYPE html>\n{html}\n", html = self.document.to_html())
    }
}
