//! Interview Assist - structured interview answers from a hosted model.

pub mod ai;
pub mod answer;
pub mod assistant;
pub mod client;
pub mod config;
pub mod display;
pub mod server;
