//! Warnings with colored terminal output.
//!
//! The style layer is defensive rather than fail-fast: malformed inputs and
//! handler contract violations fall back to a best-effort value instead of
//! returning errors. Those fallbacks are reported here, deduplicated so a
//! style recalculated on every frame does not spam the terminal.

use std::collections::HashSet;
use std::sync::Mutex;

/// ANSI color codes for terminal output
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Warn about a defensive fallback (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("Style", "opacity value 'fuzzy' is not numeric, ignoring");
/// ```
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn warn_once(component: &str, message: &str) {
    let key = format!("[{component}] {message}");
    let should_print = WARNED
        .lock()
        .unwrap()
        .get_or_insert_with(HashSet::new)
        .insert(key);

    if should_print {
        eprintln!("{YELLOW}[Wallaby {component}] ⚠ {message}{RESET}");
    }
}

/// Clear all recorded warnings (call when loading a new document)
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap();
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
