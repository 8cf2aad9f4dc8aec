//! Domain layer - pure billing types and logic, no I/O.

pub mod billing;
