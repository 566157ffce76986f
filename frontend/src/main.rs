fn main() {
    if let Err(err) = staffsync_frontend::run() {
        web_sys::console::error_1(&format!("StaffSync failed to start: {err:#}").into());
    }
}
