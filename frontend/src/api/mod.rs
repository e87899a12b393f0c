pub mod rank_api;
pub mod tag_api;
