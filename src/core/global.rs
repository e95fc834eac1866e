//! Process-wide logger slot
//!
//! Holds the single logger every call site reaches through [`logger()`].
//! Installing a logger swaps the whole handle: the previous logger is
//! returned to the caller, not merged. Handles already cloned out of the slot
//! stay valid and keep writing to the logger they were taken from.

use super::logger::Logger;
use parking_lot::{const_rwlock, RwLock};
use std::sync::{Arc, OnceLock};

static GLOBAL_LOGGER: RwLock<Option<Arc<Logger>>> = const_rwlock(None);
static NOOP_LOGGER: OnceLock<Arc<Logger>> = OnceLock::new();

/// The current process-wide logger.
///
/// Before anything is installed this is a shared logger with no appenders,
/// so logging is safe but produces no output.
pub fn logger() -> Arc<Logger> {
    if let Some(logger) = GLOBAL_LOGGER.read().as_ref() {
        return Arc::clone(logger);
    }
    Arc::clone(NOOP_LOGGER.get_or_init(|| Arc::new(Logger::new())))
}

/// Install `logger` as the process-wide logger, returning the one it replaces.
pub fn set_global_logger(logger: Arc<Logger>) -> Option<Arc<Logger>> {
    GLOBAL_LOGGER.write().replace(logger)
}

/// Remove the installed logger; [`logger()`] falls back to the no-op logger.
pub fn take_global_logger() -> Option<Arc<Logger>> {
    GLOBAL_LOGGER.write().take()
}

pub fn is_initialized() -> bool {
    GLOBAL_LOGGER.read().is_some()
}
