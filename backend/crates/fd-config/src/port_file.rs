//! Port discovery file.
//!
//! The server writes `<config_dir>/server.json` after binding so the `fd`
//! CLI can find it without a `--server` flag. A file left behind by a crashed
//! server is detected by checking whether its PID is still alive.

use crate::{Config, ConfigError, ConfigErrorResult};

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

const PORT_FILENAME: &str = "server.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortFileInfo {
    pub pid: u32,
    pub port: u16,
    pub host: String,
    /// RFC 3339 start time
    pub started_at: String,
    pub version: String,
}

impl PortFileInfo {
    pub fn path() -> ConfigErrorResult<PathBuf> {
        Ok(Config::config_dir()?.join(PORT_FILENAME))
    }

    /// Write the port file into the config directory.
    ///
    /// Refuses to overwrite the file of another live server.
    pub fn write(port: u16, host: &str) -> ConfigErrorResult<PathBuf> {
        Self::write_in(&Config::config_dir()?, port, host)
    }

    pub fn write_in(config_dir: &Path, port: u16, host: &str) -> ConfigErrorResult<PathBuf> {
        let path = config_dir.join(PORT_FILENAME);

        std::fs::create_dir_all(config_dir).map_err(|e| ConfigError::Io {
            path: config_dir.to_path_buf(),
            source: e,
        })?;

        if let Ok(Some(existing)) = Self::read_live_in(config_dir)
            && existing.pid != std::process::id()
        {
            return Err(ConfigError::server(format!(
                "Another fd-server is already running on port {} (PID {})",
                existing.port, existing.pid
            )));
        }

        let info = PortFileInfo {
            pid: std::process::id(),
            port,
            host: host.to_string(),
            started_at: chrono::Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        };

        let content = serde_json::to_string_pretty(&info)
            .map_err(|e| ConfigError::config(format!("Failed to serialize port file: {e}")))?;

        std::fs::write(&path, content).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        Ok(path)
    }

    /// `Ok(None)` when no file exists.
    pub fn read_in(config_dir: &Path) -> ConfigErrorResult<Option<PortFileInfo>> {
        let path = config_dir.join(PORT_FILENAME);

        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|e| ConfigError::config(format!("Invalid port file {}: {e}", path.display())))
    }

    /// Like [`read_live_in`](Self::read_live_in) for the default config directory.
    pub fn read_live() -> ConfigErrorResult<Option<PortFileInfo>> {
        Self::read_live_in(&Config::config_dir()?)
    }

    /// Read the port file and drop it if its server process is gone.
    pub fn read_live_in(config_dir: &Path) -> ConfigErrorResult<Option<PortFileInfo>> {
        match Self::read_in(config_dir)? {
            Some(info) if is_process_running(info.pid) => Ok(Some(info)),
            Some(info) => {
                log::debug!("Removing stale port file for PID {}", info.pid);
                Self::remove_in(config_dir)?;
                Ok(None)
            }
            None => Ok(None),
        }
    }

    pub fn remove() -> ConfigErrorResult<()> {
        Self::remove_in(&Config::config_dir()?)
    }

    pub fn remove_in(config_dir: &Path) -> ConfigErrorResult<()> {
        let path = config_dir.join(PORT_FILENAME);
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ConfigError::Io { path, source: e }),
        }
    }
}

/// `kill(pid, 0)` probes for existence without delivering a signal.
#[cfg(unix)]
pub fn is_process_running(pid: u32) -> bool {
    let Ok(pid) = libc::pid_t::try_from(pid) else {
        return false;
    };
    // SAFETY: signal 0 performs only the permission and existence check.
    unsafe { libc::kill(pid, 0) == 0 }
}

#[cfg(not(unix))]
pub fn is_process_running(_pid: u32) -> bool {
    // No cheap probe here; the CLI surfaces a connection error instead.
    true
}
