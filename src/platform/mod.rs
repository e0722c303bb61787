//! Platform abstraction layer
//!
//! Presentation backends the simulation can run against:
//! - `headless`: in-memory playfield with linear fall animation (native runner, tests)

pub mod headless;

pub use headless::HeadlessField;
