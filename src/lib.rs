pub mod configuration;
pub mod controller;
pub mod dao;
pub mod error;
pub mod handler;
pub mod helpers;
pub mod migration;
pub mod model;
pub mod provider;
pub mod server;
pub mod types;
