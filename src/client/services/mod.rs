pub mod query_client;
