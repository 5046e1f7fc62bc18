// lib.rs - Library root for citepush

pub mod application;
pub mod citation;
pub mod cli;
pub mod launcher;
pub mod preferences;
pub mod push;
pub mod registry;

pub use application::{CommandLine, PushApplication};
pub use citation::CitationCommandString;
pub use launcher::{LaunchError, Launcher, ProcessHandle, SystemLauncher};
pub use preferences::{FilePreferences, PreferenceSource, PushPreferences};
pub use push::{PushError, Pusher, push_entries};
pub use registry::CommandPathRegistry;
