//! Shared library surface for convoy server utilities and tests.

pub mod api;
pub mod config;
pub mod convoy_planner;
pub mod incident_intake;
pub mod state;
