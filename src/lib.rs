//! Library exports for itam-client, shared between the binary and tests.

pub mod api;
pub mod auth;
pub mod config;
pub mod models;
pub mod navigation;
pub mod routes;
pub mod startup;
pub mod state;
pub mod storage;
pub mod utils;
pub mod views;
