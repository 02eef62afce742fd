//! Lookup functions
//!
//! A lookup maps a key to its raw value. It is total: a missing key reads as
//! an empty string, so an unset key and a key set to `""` look the same.

use std::collections::HashMap;
use std::env;
use std::fs;

/// Read `key` from the process environment.
///
/// Unset and non-UTF-8 variables read as `""`.
pub fn process_env(key: &str) -> String {
    env::var(key).unwrap_or_default()
}

/// An in-memory lookup over `pairs`
pub fn from_map<I, K, V>(pairs: I) -> impl Fn(&str) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let map: HashMap<String, String> = pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect();
    move |key: &str| map.get(key).cloned().unwrap_or_default()
}

/// Wrap `inner` with file-based secrets support.
///
/// When `inner` returns `""` for `KEY`, the file named by `KEY_FILE` is read
/// and its contents, trimmed, are returned instead. This is the layout used
/// by Kubernetes and Docker secrets. The direct value always wins.
///
/// An unreadable file is logged and reads as `""`.
pub fn with_files<F>(inner: F) -> impl Fn(&str) -> String
where
    F: Fn(&str) -> String,
{
    move |key: &str| {
        let value = inner(key);
        if !value.is_empty() {
            return value;
        }

        let file_key = format!("{key}_FILE");
        let path = inner(&file_key);
        if path.is_empty() {
            return value;
        }

        match fs::read_to_string(&path) {
            Ok(contents) => contents.trim().to_string(),
            Err(err) => {
                tracing::warn!(key = %file_key, %path, %err, "failed to read secret file");
                String::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    #[serial]
    fn test_process_env() {
        env::set_var("ASSERTENV_TEST_VAR", "42");
        assert_eq!(process_env("ASSERTENV_TEST_VAR"), "42");
        env::remove_var("ASSERTENV_TEST_VAR");
        assert_eq!(process_env("ASSERTENV_TEST_VAR"), "");
    }

    #[test]
    fn test_from_map_missing_is_empty() {
        let lookup = from_map([("A", "1")]);
        assert_eq!(lookup("A"), "1");
        assert_eq!(lookup("B"), "");
    }

    #[test]
    fn test_with_files_reads_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "secret_value").unwrap();
        let path = temp_file.path().to_str().unwrap().to_string();

        let lookup = with_files(from_map([("API_KEY_FILE", path)]));
        assert_eq!(lookup("API_KEY"), "secret_value");
    }

    #[test]
    fn test_with_files_prefers_direct() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "file_value").unwrap();
        let path = temp_file.path().to_str().unwrap().to_string();

        let lookup = with_files(from_map([
            ("API_KEY", "direct_value".to_string()),
            ("API_KEY_FILE", path),
        ]));
        assert_eq!(lookup("API_KEY"), "direct_value");
    }

    #[test]
    fn test_with_files_unreadable_is_empty() {
        let lookup = with_files(from_map([("API_KEY_FILE", "/nonexistent/file/path")]));
        assert_eq!(lookup("API_KEY"), "");
    }

    #[test]
    fn test_with_files_neither_set() {
        let lookup = with_files(from_map::<_, &str, &str>([]));
        assert_eq!(lookup("API_KEY"), "");
    }
}
