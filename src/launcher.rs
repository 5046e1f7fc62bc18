// launcher.rs - Starting the external editor process

use std::io::ErrorKind;
use std::process::{Command, Stdio};

#[derive(thiserror::Error, Debug)]
pub enum LaunchError {
    #[error("Empty command line")]
    EmptyCommand,
    #[error("Executable '{program}' not found")]
    NotFound {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Permission denied running '{program}'")]
    PermissionDenied {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to start '{program}'")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

impl LaunchError {
    fn from_io(program: &str, source: std::io::Error) -> Self {
        let program = program.to_string();
        match source.kind() {
            ErrorKind::NotFound => LaunchError::NotFound { program, source },
            ErrorKind::PermissionDenied => LaunchError::PermissionDenied { program, source },
            _ => LaunchError::Spawn { program, source },
        }
    }
}

/// A started process. The child is not waited on or tracked further.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessHandle {
    pub pid: u32,
}

pub trait Launcher {
    /// Start `argv[0]` with the remaining elements as its arguments.
    fn launch(&self, argv: &[String]) -> Result<ProcessHandle, LaunchError>;
}

/// Spawns directly through the OS, never through a shell.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn launch(&self, argv: &[String]) -> Result<ProcessHandle, LaunchError> {
        let (program, args) = argv.split_first().ok_or(LaunchError::EmptyCommand)?;

        // Editors are long running; keep them off our stdio.
        let child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| LaunchError::from_io(program, e))?;

        log::debug!("Started '{}' as pid {}", program, child.id());
        Ok(ProcessHandle { pid: child.id() })
    }
}
