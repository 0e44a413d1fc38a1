pub mod configuration;
pub mod constant;
pub mod document;
pub mod domain;
pub mod error;
pub mod generator_client;
pub mod request;
pub mod routes;
pub mod startup;
pub mod telemetry;
pub mod utils;
