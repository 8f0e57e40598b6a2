pub mod app;

pub use app::{get, make_test_app, read_json};
