pub mod configuration;
pub mod repository;
