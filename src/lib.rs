pub mod config;
pub mod model;
pub mod parser;
pub mod storage;
