// push.rs - Resolve, build and launch a citation push

use crate::application::PushApplication;
use crate::launcher::{LaunchError, Launcher, ProcessHandle};
use crate::preferences::{PreferenceSource, PreferencesError, PushPreferences};

#[derive(thiserror::Error, Debug)]
pub enum PushError {
    #[error("No executable path configured for {0}. Set it in the push preferences.")]
    PathNotConfigured(String),
    #[error("Could not push to {application}")]
    LaunchFailed {
        application: String,
        #[source]
        source: LaunchError,
    },
    /// Not produced yet; empty or odd key strings are pushed as-is.
    #[error("Invalid citation key input: {0}")]
    InvalidKeyInput(String),
    #[error(transparent)]
    Preferences(#[from] PreferencesError),
}

/// Split a comma-joined key string. Surrounding whitespace is trimmed and
/// empty pieces are dropped, so `""` gives no keys at all.
pub fn split_keys(keys_csv: &str) -> Vec<&str> {
    keys_csv
        .split(',')
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .collect()
}

/// Push `keys_csv` to `application` using one preference snapshot.
///
/// Nothing is launched when the application has no configured path.
pub fn push_entries(
    application: PushApplication,
    keys_csv: &str,
    prefs: &PushPreferences,
    launcher: &dyn Launcher,
) -> Result<ProcessHandle, PushError> {
    let keys = split_keys(keys_csv);
    let display_name = application.display_name();

    let path = prefs.command_paths.resolve(display_name).ok_or_else(|| {
        log::warn!("No command path configured for {}", display_name);
        PushError::PathNotConfigured(display_name.to_string())
    })?;

    let command = application.build_command_line(&keys, Some(path), prefs);
    let argv = command
        .to_argv()
        .ok_or_else(|| PushError::PathNotConfigured(display_name.to_string()))?;
    log::info!("Pushing {} key(s) to {}", keys.len(), display_name);
    log::debug!("Command line: {:?}", argv);

    launcher.launch(&argv).map_err(|source| {
        log::warn!("Push to {} failed: {}", display_name, source);
        PushError::LaunchFailed {
            application: display_name.to_string(),
            source,
        }
    })
}

/// Couples a preference source with a launcher. Preferences are loaded
/// again for every push, so edits apply to the next push.
pub struct Pusher<P, L> {
    preferences: P,
    launcher: L,
}

impl<P: PreferenceSource, L: Launcher> Pusher<P, L> {
    pub fn new(preferences: P, launcher: L) -> Self {
        Self {
            preferences,
            launcher,
        }
    }

    pub fn push(&self, application: PushApplication, keys_csv: &str) -> Result<(), PushError> {
        let prefs = self.preferences.load()?;
        push_entries(application, keys_csv, &prefs, &self.launcher).map(|_| ())
    }

    pub fn preferences(&self) -> &P {
        &self.preferences
    }

    pub fn launcher(&self) -> &L {
        &self.launcher
    }
}
