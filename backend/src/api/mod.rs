//! Rank API route handlers and module exports.

mod domains;
pub use domains::list_domains;

mod keywords;
pub use keywords::{create_keywords, list_keywords};

mod tags;
pub use tags::{delete_tag, list_tags, update_tag};
