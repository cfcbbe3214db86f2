//! Storage root resolution
//!
//! Single source of truth for locating the bus storage root.
//!
//! # Precedence
//!
//! 1. Explicit override (the CLI's `--dir` flag)
//! 2. `AGENTBUS_DIR` environment variable (if set and non-empty)
//! 3. `.agentbus` under the current working directory
//!
//! Integration tests use `AGENTBUS_DIR` to point each invocation at a
//! temporary directory.

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Environment variable overriding the storage root.
pub const ROOT_ENV: &str = "AGENTBUS_DIR";

/// Directory name used under the current working directory by default.
pub const DEFAULT_DIR_NAME: &str = ".agentbus";

/// Resolve the storage root for bus operations.
///
/// # Errors
///
/// Returns an error only when no override is given and the current
/// working directory cannot be determined.
pub fn resolve_root(cli_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = cli_override {
        return Ok(dir);
    }

    if let Ok(dir) = std::env::var(ROOT_ENV) {
        let trimmed = dir.trim();
        if !trimmed.is_empty() {
            return Ok(PathBuf::from(trimmed));
        }
    }

    let cwd = std::env::current_dir().context("could not determine current working directory")?;
    Ok(cwd.join(DEFAULT_DIR_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    #[test]
    #[serial]
    fn cli_override_wins_over_env() {
        let original = env::var(ROOT_ENV).ok();
        unsafe { env::set_var(ROOT_ENV, "/from/env") };

        let root = resolve_root(Some(PathBuf::from("/from/cli"))).unwrap();
        assert_eq!(root, PathBuf::from("/from/cli"));

        unsafe {
            match original {
                Some(v) => env::set_var(ROOT_ENV, v),
                None => env::remove_var(ROOT_ENV),
            }
        }
    }

    #[test]
    #[serial]
    fn env_var_used_when_set() {
        let original = env::var(ROOT_ENV).ok();
        unsafe { env::set_var(ROOT_ENV, "/custom/bus") };

        let root = resolve_root(None).unwrap();
        assert_eq!(root, PathBuf::from("/custom/bus"));

        unsafe {
            match original {
                Some(v) => env::set_var(ROOT_ENV, v),
                None => env::remove_var(ROOT_ENV),
            }
        }
    }

    #[test]
    #[serial]
    fn env_var_trimmed() {
        let original = env::var(ROOT_ENV).ok();
        unsafe { env::set_var(ROOT_ENV, "  /custom/bus  ") };

        let root = resolve_root(None).unwrap();
        assert_eq!(root, PathBuf::from("/custom/bus"));

        unsafe {
            match original {
                Some(v) => env::set_var(ROOT_ENV, v),
                None => env::remove_var(ROOT_ENV),
            }
        }
    }

    #[test]
    #[serial]
    fn empty_env_var_falls_back_to_cwd() {
        let original = env::var(ROOT_ENV).ok();
        unsafe { env::set_var(ROOT_ENV, "") };

        let root = resolve_root(None).unwrap();
        let expected = env::current_dir().unwrap().join(DEFAULT_DIR_NAME);
        assert_eq!(root, expected);

        unsafe {
            match original {
                Some(v) => env::set_var(ROOT_ENV, v),
                None => env::remove_var(ROOT_ENV),
            }
        }
    }

    #[test]
    #[serial]
    fn default_is_dot_agentbus_under_cwd() {
        let original = env::var(ROOT_ENV).ok();
        unsafe { env::remove_var(ROOT_ENV) };

        let root = resolve_root(None).unwrap();
        let expected = env::current_dir().unwrap().join(DEFAULT_DIR_NAME);
        assert_eq!(root, expected);

        unsafe {
            if let Some(v) = original {
                env::set_var(ROOT_ENV, v);
            }
        }
    }
}
