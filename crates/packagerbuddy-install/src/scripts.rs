//! Post-install hook scripts
//!
//! Scripts live in the scripts directory and are matched by name: a
//! version-agnostic `{software}` script plus any `{software}-{version}*`
//! entry. Each is invoked as `script software version` from the install
//! directory.

use glob::Pattern;
use packagerbuddy_core::paths;
use packagerbuddy_core::{Error, Result, SoftwareName, Version};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info};

/// Captured output of a successful script run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptOutput {
    pub script: PathBuf,
    pub stdout: String,
    pub stderr: String,
}

/// Finds and runs post-install scripts
#[derive(Debug, Clone)]
pub struct ScriptRunner {
    scripts_dir: PathBuf,
}

impl ScriptRunner {
    pub fn new(scripts_dir: impl Into<PathBuf>) -> Self {
        Self {
            scripts_dir: scripts_dir.into(),
        }
    }

    pub fn scripts_dir(&self) -> &Path {
        &self.scripts_dir
    }

    /// Scripts applying to a release, sorted by path
    ///
    /// A missing scripts directory yields no scripts.
    pub fn find_scripts(
        &self,
        software: &SoftwareName,
        version: &Version,
    ) -> Result<Vec<PathBuf>> {
        let entries = match fs::read_dir(&self.scripts_dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(Error::Io(e)),
        };

        let versioned = Pattern::new(&format!(
            "{}*",
            Pattern::escape(&paths::release_name(software, version))
        ))?;

        let mut scripts = Vec::new();
        for entry in entries {
            let entry = entry?;
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                continue;
            };
            if name == software.as_str() || versioned.matches(name) {
                scripts.push(entry.path());
            }
        }

        scripts.sort();
        debug!("Found {} script(s) for {} {}", scripts.len(), software, version);
        Ok(scripts)
    }

    /// Run one script with `software version` as arguments
    ///
    /// A non-zero exit status is reported as [`Error::Script`] carrying the
    /// script's stderr.
    pub async fn run_script(
        &self,
        script: &Path,
        software: &SoftwareName,
        version: &Version,
        working_dir: &Path,
    ) -> Result<ScriptOutput> {
        info!("Running script {}", script.display());

        let output = Command::new(script)
            .arg(software.as_str())
            .arg(version.as_str())
            .current_dir(working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            return Err(Error::script(script, code, stderr.trim_end()));
        }

        debug!("Script {} finished", script.display());
        Ok(ScriptOutput {
            script: script.to_path_buf(),
            stdout,
            stderr,
        })
    }

    /// Run every matching script in order, stopping at the first failure
    pub async fn run_all(
        &self,
        software: &SoftwareName,
        version: &Version,
        working_dir: &Path,
    ) -> Result<Vec<ScriptOutput>> {
        let mut outputs = Vec::new();
        for script in self.find_scripts(software, version)? {
            let output = self
                .run_script(&script, software, version, working_dir)
                .await?;
            outputs.push(output);
        }
        Ok(outputs)
    }
}
