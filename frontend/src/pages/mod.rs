pub mod dashboard_page;
pub mod keywords_page;
