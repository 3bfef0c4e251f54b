use async_trait::async_trait;
use contributors::api::{Error, LogSource, Result};
use log::debug;
use std::path::PathBuf;
use tokio::process::Command;

/// `git log` format producing one `Name <email>` line per commit, with mailmap applied.
pub const AUTHOR_FORMAT: &str = "--pretty=format:%aN <%ae>";

pub struct GitLogSource {
    git: PathBuf,
    work_dir: PathBuf,
}

pub struct GitLogSourceBuilder {
    git: PathBuf,
    work_dir: PathBuf,
}

impl Default for GitLogSourceBuilder {
    fn default() -> Self {
        Self {
            git: PathBuf::from("git"),
            work_dir: PathBuf::from("."),
        }
    }
}

impl GitLogSourceBuilder {
    pub fn with_work_dir<P: Into<PathBuf>>(mut self, work_dir: P) -> GitLogSourceBuilder {
        self.work_dir = work_dir.into();
        self
    }

    pub fn with_git_binary<P: Into<PathBuf>>(mut self, git: P) -> GitLogSourceBuilder {
        self.git = git.into();
        self
    }

    pub fn build(self) -> GitLogSource {
        GitLogSource {
            git: self.git,
            work_dir: self.work_dir,
        }
    }
}

#[async_trait]
impl LogSource for GitLogSource {
    async fn author_log(&self) -> Result<String> {
        debug!("Running {} log in {}", self.git.display(), self.work_dir.display());
        let output = Command::new(&self.git)
            .arg("log")
            .arg(AUTHOR_FORMAT)
            .current_dir(&self.work_dir)
            .output()
            .await
            .map_err(|err| Error::SourceFetch(err.to_string()))?;

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if !output.status.success() {
            return Err(Error::SourceFetch(if stderr.is_empty() {
                format!("{} log failed: {}", self.git.display(), output.status)
            } else {
                stderr
            }));
        }
        if !stderr.is_empty() {
            return Err(Error::SourceFetch(stderr));
        }

        String::from_utf8(output.stdout).map_err(|err| Error::SourceFetch(err.to_string()))
    }
}
