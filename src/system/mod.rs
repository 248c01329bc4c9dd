//! Core system components for the heartbeat
pub mod config;
pub mod counter;
pub mod delay;
pub mod log_sink;
pub mod state;
