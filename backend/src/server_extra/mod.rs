pub mod export_keywords;
