//! Shared table constants.

pub const PAGE_SIZE: u64 = 50;
