pub mod directory;
pub mod stats;

pub use directory::DirectorySection;
pub use stats::StatsSection;
