pub mod live_updates;
