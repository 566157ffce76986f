mod components;
pub mod config;
pub mod model;
mod pages;
pub mod router;
mod state;
#[cfg(test)]
mod test_support;
pub mod utils;

#[cfg(target_arch = "wasm32")]
pub fn init_logging(level: log::LevelFilter) -> anyhow::Result<()> {
    use anyhow::Context;

    let level = level.to_level().unwrap_or(log::Level::Error);
    console_log::init_with_level(level).context("failed to install console logger")
}

#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging(_level: log::LevelFilter) -> anyhow::Result<()> {
    Ok(())
}

/// Boots the app: panic hook, logging, then the router.
pub fn run() -> anyhow::Result<()> {
    console_error_panic_hook::set_once();
    let cfg = config::current();
    init_logging(cfg.log_level)?;
    log::info!(
        "Starting StaffSync frontend (late after {}, theme key {:?})",
        cfg.late_after.format("%H:%M"),
        cfg.dark_mode_key
    );
    router::mount_app();
    Ok(())
}
