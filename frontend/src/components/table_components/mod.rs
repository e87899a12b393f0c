pub mod keyword_table;
pub mod domain_table;
pub mod filter_panel;
pub mod add_keyword_form;
