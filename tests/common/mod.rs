//! Common test utilities for extpack integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// A throwaway installed site with a staging directory next to it
pub struct TestSite {
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Site root (what `--root` points at)
    pub root: PathBuf,
    /// Staging directory (what `--destination` points at)
    pub dest: PathBuf,
}

impl TestSite {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = temp.path().join("site");
        let dest = temp.path().join("dest");
        std::fs::create_dir_all(&root).expect("Failed to create site root");
        Self { temp, root, dest }
    }

    /// Write a file below the site root
    pub fn write_file(&self, path: &str, content: &str) {
        write(&self.root.join(path), content);
    }

    /// Write a file below the temp dir, next to the site
    #[allow(dead_code)]
    pub fn write_outside(&self, path: &str, content: &str) -> PathBuf {
        let file_path = self.temp.path().join(path);
        write(&file_path, content);
        file_path
    }

    /// Read a file from the staging directory
    #[allow(dead_code)]
    pub fn read_dest(&self, path: &str) -> String {
        std::fs::read_to_string(self.dest.join(path)).expect("Failed to read staged file")
    }

    /// Check if a file exists in the staging directory
    #[allow(dead_code)]
    pub fn dest_exists(&self, path: &str) -> bool {
        self.dest.join(path).exists()
    }

    pub fn root_str(&self) -> String {
        self.root.display().to_string()
    }

    #[allow(dead_code)]
    pub fn dest_str(&self) -> String {
        self.dest.display().to_string()
    }

    /// Command for the real binary, run inside the temp dir
    #[allow(dead_code)]
    pub fn cmd(&self) -> Command {
        let mut cmd = extpack_cmd();
        cmd.current_dir(self.temp.path()).env_remove("RUST_LOG").env_remove("EXTPACK_CONFIG");
        cmd
    }
}

impl Default for TestSite {
    fn default() -> Self {
        Self::new()
    }
}

fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    std::fs::write(path, content).expect("Failed to write file");
}

#[allow(deprecated)]
pub fn extpack_cmd() -> Command {
    Command::cargo_bin("extpack").expect("binary is built")
}

/// A component with site and administrator files, languages and media
#[allow(dead_code)]
pub const HELLO_COMPONENT_MANIFEST: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<extension type="component" method="upgrade">
    <name>com_hello</name>
    <files folder="site">
        <filename>hello.php</filename>
        <folder>views</folder>
    </files>
    <languages folder="site/language">
        <language tag="en-GB">en-GB/en-GB.com_hello.ini</language>
    </languages>
    <media destination="com_hello" folder="media">
        <folder>css</folder>
    </media>
    <administration>
        <files folder="admin">
            <filename>admin.hello.php</filename>
        </files>
        <languages folder="admin/language">
            <language tag="en-GB">en-GB/en-GB.com_hello.sys.ini</language>
        </languages>
    </administration>
</extension>
"#;
