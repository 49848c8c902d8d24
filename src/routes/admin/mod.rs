pub mod metrics;
pub mod reset;
