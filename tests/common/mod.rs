//! Shared testing utilities for ray-images CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const SAMPLE_IMAGES: &str = r#"ray:
  python: ["3.9", "3.10", "3.11"]
  platforms: ["cpu", "cu12.1.1-cudnn8"]
  architectures: ["x86_64", "aarch64"]
  defaults:
    python: "3.10"
    platform: "cpu"
ray-ml:
  python: ["3.10"]
  platforms: ["cu12.1.1-cudnn8"]
  architectures: ["x86_64"]
  defaults:
    python: "3.10"
"#;

/// Isolated checkout: `<tmp>/repo` plus an unrelated `<tmp>/outside` directory.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    repo: PathBuf,
    outside: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a repository with a root marker and the sample images file.
    pub fn new() -> Self {
        let ctx = Self::empty();
        ctx.write_marker();
        ctx.write_images(SAMPLE_IMAGES);
        ctx
    }

    /// Create the directory layout with no marker and no images file.
    pub fn empty() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let repo = root.path().join("repo");
        let outside = root.path().join("outside");
        fs::create_dir_all(repo.join("ci/ray_ci")).expect("Failed to create repo directory");
        fs::create_dir_all(&outside).expect("Failed to create outside directory");
        Self { root, repo, outside }
    }

    pub fn repo(&self) -> &Path {
        &self.repo
    }

    pub fn outside(&self) -> &Path {
        &self.outside
    }

    pub fn write_marker(&self) {
        fs::write(self.repo.join(".rayciversion"), "").expect("Failed to write marker");
    }

    pub fn write_images(&self, content: &str) {
        fs::write(self.repo.join("ray-images.yaml"), content).expect("Failed to write images");
    }

    /// Build a command for the compiled binary running inside the repository.
    pub fn cli(&self) -> Command {
        self.cli_in(self.repo())
    }

    /// Build a command for the compiled binary running inside a custom directory.
    pub fn cli_in<P: AsRef<Path>>(&self, dir: P) -> Command {
        let mut cmd = Command::cargo_bin("ray-images").expect("Failed to locate ray-images binary");
        cmd.current_dir(dir.as_ref()).env_remove("RUST_LOG");
        cmd
    }
}
