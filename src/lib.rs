// Library crate exposing modules for integration tests

pub mod cli;
pub mod error;
pub mod model;
pub mod repository;
pub mod util;
pub mod view;
