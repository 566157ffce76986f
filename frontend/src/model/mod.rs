pub mod attendance;
pub mod employee;
pub mod stats;

pub use attendance::*;
pub use employee::*;
pub use stats::*;
