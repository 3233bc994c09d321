use crate::assist::traits::LinkOpener;
use std::process::{Command, Stdio};
use tracing::{info, warn};

/// Only logs the link. Used by the demo driver and headless runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingOpener;

impl LinkOpener for LoggingOpener {
    fn open(&self, uri: &str) {
        info!("Opening {}", uri);
    }
}

/// Hands the link to the desktop's default handler
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl SystemOpener {
    fn command(uri: &str) -> Command {
        if cfg!(target_os = "macos") {
            let mut cmd = Command::new("open");
            cmd.arg(uri);
            cmd
        } else if cfg!(target_os = "windows") {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", "start", "", uri]);
            cmd
        } else {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(uri);
            cmd
        }
    }
}

impl LinkOpener for SystemOpener {
    fn open(&self, uri: &str) {
        let spawned = Self::command(uri)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
        if let Err(e) = spawned {
            warn!("Could not open {}: {}", uri, e);
        }
    }
}
