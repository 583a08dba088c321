//! Browser smoke tests for the web package, run against `dx serve`.

pub mod browser;
pub mod test_server;
