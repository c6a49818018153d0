pub mod checkbox;
pub mod column_picker;
pub mod filter_modal;
pub mod filter_panel;
pub mod list_page;
pub mod list_table;
pub mod search_input;

pub use checkbox::Checkbox;
pub use column_picker::ColumnPicker;
pub use filter_modal::FilterModal;
pub use filter_panel::{FilterPanel, FilterTag};
pub use list_page::ListPage;
pub use list_table::ListTable;
pub use search_input::SearchInput;
