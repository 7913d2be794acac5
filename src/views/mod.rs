mod category_options;
mod category_table;
mod menu_tables;
mod product_row;

pub use self::category_options::{CategoryOptions, OptionButton};
pub use self::category_table::CategoryTable;
pub use self::menu_tables::{MenuSummary, MenuTables};
pub use self::product_row::ProductRow;
