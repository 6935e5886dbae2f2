//! Cooperative execution of consumers inside an async runtime.

pub mod yield_by;
