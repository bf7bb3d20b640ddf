//! Configuration and event models shared by both relays

pub mod config;
pub mod models;
