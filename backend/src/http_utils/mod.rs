pub mod ranker_client;
