//! [`Sandbox`] fixture standing in for `/` and `$HOME`.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory holding a fake system root and a fake home directory.
///
/// Paths passed to the helpers are relative: `"etc/npmrc"` under the root,
/// `".npmrc"` under the home.
///
/// # Example
///
/// ```rust,no_run
/// use proxy_test_utils::Sandbox;
///
/// let sandbox = Sandbox::new();
/// sandbox.write_home(".bashrc", "alias ll='ls -l'\n");
/// sandbox.assert_home_contains(".bashrc", "alias ll");
/// ```
pub struct Sandbox {
    temp_dir: TempDir,
}

impl Default for Sandbox {
    fn default() -> Self {
        Self::new()
    }
}

impl Sandbox {
    /// Create the temporary directory with empty `root/` and `home/` inside.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("root")).unwrap();
        fs::create_dir(temp_dir.path().join("home")).unwrap();
        Self { temp_dir }
    }

    /// The fake system root.
    pub fn root(&self) -> PathBuf {
        self.temp_dir.path().join("root")
    }

    /// The fake home directory.
    pub fn home(&self) -> PathBuf {
        self.temp_dir.path().join("home")
    }

    /// Write a file under the root, creating parent directories.
    pub fn write_system(&self, relative: &str, content: &str) -> PathBuf {
        write(&self.root().join(relative), content)
    }

    /// Write a file under the home, creating parent directories.
    pub fn write_home(&self, relative: &str, content: &str) -> PathBuf {
        write(&self.home().join(relative), content)
    }

    /// Read a file under the root.
    ///
    /// # Panics
    /// Panics if the file cannot be read.
    pub fn read_system(&self, relative: &str) -> String {
        read(&self.root().join(relative))
    }

    /// Read a file under the home.
    ///
    /// # Panics
    /// Panics if the file cannot be read.
    pub fn read_home(&self, relative: &str) -> String {
        read(&self.home().join(relative))
    }

    /// Assert that the file under the home contains `content`.
    pub fn assert_home_contains(&self, relative: &str, content: &str) {
        assert_contains(&self.home().join(relative), content);
    }

    /// Assert that the file under the root contains `content`.
    pub fn assert_system_contains(&self, relative: &str, content: &str) {
        assert_contains(&self.root().join(relative), content);
    }
}

fn write(path: &Path, content: &str) -> PathBuf {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
    path.to_path_buf()
}

fn read(path: &Path) -> String {
    fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Could not read {}: {e}", path.display()))
}

fn assert_contains(path: &Path, content: &str) {
    let actual = read(path);
    assert!(
        actual.contains(content),
        "File {} does not contain expected content.\nExpected: {}\nActual: {}",
        path.display(),
        content,
        actual
    );
}
