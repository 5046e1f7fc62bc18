// Common test utilities: a launcher double and preference builders

use citepush::citation::CitationCommandString;
use citepush::launcher::{LaunchError, Launcher, ProcessHandle};
use citepush::preferences::PushPreferences;
use std::cell::RefCell;

/// Records every argv instead of starting a process.
#[allow(dead_code)]
#[derive(Default)]
pub struct RecordingLauncher {
    pub calls: RefCell<Vec<Vec<String>>>,
    pub fail_with_not_found: bool,
}

impl RecordingLauncher {
    #[allow(dead_code)]
    pub fn failing() -> Self {
        Self {
            fail_with_not_found: true,
            ..Self::default()
        }
    }

    #[allow(dead_code)]
    pub fn launched(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }
}

impl Launcher for RecordingLauncher {
    fn launch(&self, argv: &[String]) -> Result<ProcessHandle, LaunchError> {
        self.calls.borrow_mut().push(argv.to_vec());
        if self.fail_with_not_found {
            return Err(LaunchError::NotFound {
                program: argv[0].clone(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            });
        }
        let pid = self.calls.borrow().len() as u32;
        Ok(ProcessHandle { pid })
    }
}

/// Preferences with a single configured path and the given wrapping.
#[allow(dead_code)]
pub fn prefs(
    display_name: &str,
    path: &str,
    prefix: &str,
    delimiter: &str,
    suffix: &str,
) -> PushPreferences {
    let mut prefs = PushPreferences {
        cite_command: CitationCommandString::new(prefix, delimiter, suffix),
        ..PushPreferences::default()
    };
    prefs.command_paths.insert(display_name, path);
    prefs
}

/// `[`, `,`, `]` wrapping with no paths configured.
#[allow(dead_code)]
pub fn bracket_prefs() -> PushPreferences {
    PushPreferences {
        cite_command: CitationCommandString::new("[", ",", "]"),
        ..PushPreferences::default()
    }
}
