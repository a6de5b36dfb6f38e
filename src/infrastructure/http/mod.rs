pub mod dummyjson_client;

pub use dummyjson_client::DummyJsonClient;
