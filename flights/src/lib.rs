pub mod airline_a;
pub mod airline_b;
pub mod domain;
pub mod metrics_defs;
pub mod provider;
pub mod search;
