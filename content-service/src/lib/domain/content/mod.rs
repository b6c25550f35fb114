pub mod errors;
pub mod models;
pub mod patches;
pub mod ports;
pub mod service;
