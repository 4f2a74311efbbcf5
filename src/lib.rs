// Library for tests to access modules

pub mod actuator;
pub mod config;
pub mod estimator;
pub mod evaluator;
pub mod models;
pub mod monitor;
pub mod procfs_repo;
pub mod version;
