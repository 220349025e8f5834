
use crate::CONFIG_DIR_ENV;

use std::env;
use std::ffi::OsString;

use tempfile::TempDir;

/// Puts one environment variable back the way it was when dropped.
/// Tests using it must be `#[serial]`.
pub(crate) struct EnvGuard {
    key: &'static str,
    previous: Option<OsString>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        let previous = env::var_os(key);
        // SAFETY: callers are serialized, no other thread touches the environment
        unsafe { env::set_var(key, value) };
        Self { key, previous }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        let previous = env::var_os(key);
        // SAFETY: callers are serialized, no other thread touches the environment
        unsafe { env::remove_var(key) };
        Self { key, previous }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        // SAFETY: see `EnvGuard::set`
        unsafe {
            match self.previous.take() {
                Some(value) => env::set_var(self.key, value),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Empty temp dir used as the config dir for the guard's lifetime
pub(crate) fn setup_config_dir() -> (TempDir, EnvGuard) {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let guard = EnvGuard::set(CONFIG_DIR_ENV, &temp.path().to_string_lossy());
    (temp, guard)
}
