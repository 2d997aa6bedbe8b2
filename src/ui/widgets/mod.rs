pub mod fields;
pub mod list_menu;
