pub mod attendance;
pub mod theme;
