pub mod navbar;
pub mod error_boundary;
pub mod suspend_boundary;
pub mod table_components;
