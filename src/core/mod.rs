//! Core library components.
//!
//! Parameter retrieval, the store backends it runs on, and configuration.
//! Nothing in here touches the terminal.

pub mod config;
pub mod constants;
pub mod domain;
pub mod service;
pub mod store;
pub mod types;
