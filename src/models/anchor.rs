use crate::constants::{HEADER_ID_PREFIX, MENU_ROOT_ID, OPTIONS_ROOT_ID};
use std::fmt::{self, Write};

/// Element identifier derived from a category name.
///
/// ASCII alphanumerics are kept as they are; every other byte of the UTF-8
/// encoding becomes `_` followed by two lowercase hex digits, and the empty
/// name becomes a lone `_`. A result equal to one of the page root ids gets
/// a trailing bare `_`. The mapping is injective and the result only
/// contains `[A-Za-z0-9_]`, so it can be used both as an id and inside a
/// fragment without further escaping.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Anchor(String);

impl Anchor {

    #[must_use]
    pub fn from_category(category: &str) -> Self {
        if category.is_empty() {
            return Self("_".to_string());
        }

        let mut encoded = String::with_capacity(category.len());
        for byte in category.bytes() {
            if byte.is_ascii_alphanumeric() {
                encoded.push(char::from(byte));
            } else {
                let _ = write!(encoded, "_{byte:02x}");
            }
        }

        // A bare `_` is never emitted by the byte encoding above.
        if [MENU_ROOT_ID, OPTIONS_ROOT_ID].contains(&encoded.as_str()) {
            encoded.push('_');
        }

        Self(encoded)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Id of the category heading, `header-<anchor>`.
    #[must_use]
    pub fn header_id(&self) -> String {
        format!("{HEADER_ID_PREFIX}{anchor}", anchor = self.0)
    }

    /// Fragment link to the category heading, `#header-<anchor>`.
    #[must_use]
    pub fn header_fragment(&self) -> String {
        format!("#{header_id}", header_id = self.header_id())
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}
