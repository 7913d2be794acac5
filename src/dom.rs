//! A small append-only element tree that serializes to HTML.
//!
//! Views receive the element they render into and only ever append to it,
//! mirroring how the page is assembled in a browser.

use std::fmt::Write;

const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

/// A child of an element, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node<'a> {
    Element(&'a Element),
    Text(&'a str),
}

// Position of a child in document order; elements index into `Element::elements`.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Slot {
    Element(usize),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attributes: Vec<(String, String)>,
    elements: Vec<Element>,
    slots: Vec<Slot>,
}

impl Element {

    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            elements: Vec::new(),
            slots: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    #[must_use]
    pub fn with_id(self, id: impl Into<String>) -> Self {
        self.with_attribute("id", id)
    }

    #[must_use]
    pub fn with_class(self, class: impl Into<String>) -> Self {
        self.with_attribute("class", class)
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.append_text(text);
        self
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name, value)),
        }
    }

    /// Appends `child` as the last child and returns it for further appends.
    pub fn append_child(&mut self, child: Self) -> &mut Self {
        let index = self.elements.len();
        self.elements.push(child);
        self.slots.push(Slot::Element(index));
        &mut self.elements[index]
    }

    pub fn append_text(&mut self, text: impl Into<String>) {
        self.slots.push(Slot::Text(text.into()));
    }

    #[cfg(test)]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn id(&self) -> Option<&str> {
        self.attribute("id")
    }

    pub fn children(&self) -> impl Iterator<Item = Node<'_>> {
        self.slots.iter().map(|slot| match slot {
            Slot::Element(index) => Node::Element(&self.elements[*index]),
            Slot::Text(text) => Node::Text(text),
        })
    }

    #[cfg(test)]
    pub fn child_count(&self) -> usize {
        self.slots.len()
    }

    #[cfg(test)]
    pub fn child_elements(&self) -> impl Iterator<Item = &Self> {
        self.elements.iter()
    }

    /// Concatenated text of this element and its descendants.
    #[cfg(test)]
    pub fn text(&self) -> String {
        let mut text = String::new();
        self.collect_text(&mut text);
        text
    }

    #[cfg(test)]
    fn collect_text(&self, text: &mut String) {
        for child in self.children() {
            match child {
                Node::Text(content) => text.push_str(content),
                Node::Element(element) => element.collect_text(text),
            }
        }
    }

    #[cfg(test)]
    pub fn find_by_id(&self, id: &str) -> Option<&Self> {
        if self.id() == Some(id) {
            return Some(self);
        }

        self.child_elements().find_map(|child| child.find_by_id(id))
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Self> {
        if self.id() == Some(id) {
            return Some(self);
        }

        self.elements.iter_mut().find_map(|child| child.find_by_id_mut(id))
    }

    pub fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.tag.as_str())
    }

    pub fn to_html(&self) -> String {
        let mut html = String::new();
        self.write_html(&mut html);
        html
    }

    fn write_html(&self, html: &mut String) {
        html.push('<');
        html.push_str(&self.tag);
        for (name, value) in &self.attributes {
            let _ = write!(html, " {name}=\"{value}\"", value = escape_attribute(value));
        }
        html.push('>');

        if self.is_void() {
            return;
        }

        for child in self.children() {
            match child {
                Node::Text(text) => html.push_str(&escape_text(text)),
                Node::Element(element) => element.write_html(html),
            }
        }

        let _ = write!(html, "</{tag}>", tag = self.tag);
    }
}

fn escape_text(text: &str) -> String {
    escape(text, false)
}

fn escape_attribute(value: &str) -> String {
    escape(value, true)
}

fn escape(input: &str, quotes: bool) -> String {
    let mut escaped = String::with_capacity(input.len());
    for character in input.chars() {
        match character {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' if quotes => escaped.push_str("&quot;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::{Element, Node};

    #[test]
    fn serializes_nested_elements_in_append_order() {
        let mut root = Element::new("div").with_id("root");
        root.append_child(Element::new("p").with_text("one"));
        root.append_child(Element::new("p").with_text("two"));

        assert_eq!(root.to_html(), r#"<div id="root"><p>one</p><p>two</p></div>"#);
    }

    #[test]
    fn void_elements_have_no_closing_tag() {
        let mut cell = Element::new("td");
        cell.append_text("a");
        cell.append_child(Element::new("br"));
        cell.append_child(Element::new("hr"));

        assert_eq!(cell.to_html(), "<td>a<br><hr></td>");
    }

    #[test]
    fn escapes_text_and_attributes() {
        let element = Element::new("a")
            .with_attribute("title", r#"say "hi" & <go>"#)
            .with_text("<b>bold</b> & \"plain\"");

        assert_eq!(
            element.to_html(),
            r#"<a title="say &quot;hi&quot; &amp; &lt;go&gt;">&lt;b&gt;bold&lt;/b&gt; &amp; "plain"</a>"#
        );
    }

    #[test]
    fn appended_child_can_be_extended_in_place() {
        let mut root = Element::new("div");
        let list = root.append_child(Element::new("ul"));
        list.append_child(Element::new("li").with_text("x"));

        assert_eq!(root.to_html(), "<div><ul><li>x</li></ul></div>");
    }

    #[test]
    fn children_keep_document_order_across_text_and_elements() {
        let mut root = Element::new("p");
        root.append_text("a");
        root.append_child(Element::new("br"));
        root.append_text("b");

        let kinds: Vec<_> = root
            .children()
            .map(|child| match child {
                Node::Text(text) => text.to_string(),
                Node::Element(element) => element.tag().to_string(),
            })
            .collect();
        assert_eq!(kinds, ["a", "br", "b"]);
        assert_eq!(root.child_count(), 3);
        assert_eq!(root.to_html(), "<p>a<br>b</p>");
    }

    #[test]
    fn finds_descendants_by_id() {
        let mut root = Element::new("body");
        root.append_child(Element::new("nav").with_id("options"));
        root.append_child(Element::new("div"))
            .append_child(Element::new("section").with_id("deep"));

        root.find_by_id_mut("deep").unwrap().append_text("found");

        assert_eq!(root.find_by_id("deep").unwrap().text(), "found");
        assert_eq!(root.find_by_id("options").unwrap().tag(), "nav");
        assert!(root.find_by_id("missing").is_none());
    }

    #[test]
    fn set_attribute_replaces_existing_value() {
        let mut element = Element::new("div").with_class("a");
        element.set_attribute("class", "b");
        assert_eq!(element.attribute("class"), Some("b"));
        assert_eq!(element.to_html(), r#"<div class="b"></div>"#);
    }
}
