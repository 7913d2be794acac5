use crate::page::Page;
use crate::prelude::*;
use crate::views::{CategoryOptions, MenuSummary, MenuTables};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PopulateSummary {
    pub menu: MenuSummary,
    pub options: usize,
}

pub struct Populator;

impl Populator {

    /// Renders the menu tables and the category options into their roots.
    /// The two only append to their own root, so the order is irrelevant.
    pub fn populate(page: &mut Page, catalog: &Catalog) -> Result<PopulateSummary> {
        let menu = Self::populate_menu(page.menu_root_mut()?, catalog);
        let options = Self::populate_options(page.options_root_mut()?, catalog);

        Ok(PopulateSummary { menu, options })
    }

    pub fn populate_menu(root: &mut Element, catalog: &Catalog) -> MenuSummary {
        MenuTables::render(root, catalog)
    }

    pub fn populate_options(root: &mut Element, catalog: &Catalog) -> usize {
        CategoryOptions::render(root, catalog)
    }
}
