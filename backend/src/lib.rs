//! Server-side proxy to the external rank-tracking REST API.

pub mod api;
pub mod http_utils;
pub mod server_extra;
