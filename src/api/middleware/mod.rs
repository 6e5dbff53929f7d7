pub mod cors;
pub mod metrics;
pub mod validation;
