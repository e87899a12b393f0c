//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod keyword;
pub mod domain;
pub mod tag;
pub mod filter_params;
pub mod columns;
pub mod filter;
pub mod compare;
pub mod country;
pub mod format;
pub mod table_const;
