use log::Level;

/// Initialize the browser console logging just once; later calls are no-ops.
pub fn init_logging() {
    if console_log::init_with_level(Level::Debug).is_err() {
        log::trace!("console logger already installed");
    }
}
