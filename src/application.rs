// application.rs - Supported external editors and their insertion command lines

use crate::preferences::PushPreferences;
use std::fmt;
use std::str::FromStr;

/// Leaves insert mode, returns to normal mode, then appends.
pub const VIM_INSERT_PREFIX: &str = "<C-\\><C-N>a";

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown application '{0}'")]
pub struct UnknownApplication(pub String);

/// One external application a citation can be pushed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PushApplication {
    LyxKile,
    SublimeText,
    TeXworks,
    TeXShop,
    Texmaker,
    TeXstudio,
    Vim,
    WinEdt,
}

/// Program plus arguments. `program` stays `None` until a path is resolved,
/// which lets the argument shape be checked without any configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: Option<String>,
    pub args: Vec<String>,
}

impl CommandLine {
    /// The full argv, or `None` if no program has been resolved.
    pub fn to_argv(&self) -> Option<Vec<String>> {
        let program = self.program.as_ref()?;
        let mut argv = Vec::with_capacity(self.args.len() + 1);
        argv.push(program.clone());
        argv.extend(self.args.iter().cloned());
        Some(argv)
    }

    /// Argv with `placeholder` standing in for an unresolved program.
    pub fn display_argv(&self, placeholder: &str) -> Vec<String> {
        std::iter::once(self.program.as_deref().unwrap_or(placeholder).to_string())
            .chain(self.args.iter().cloned())
            .collect()
    }
}

impl PushApplication {
    pub const ALL: [PushApplication; 8] = [
        PushApplication::LyxKile,
        PushApplication::SublimeText,
        PushApplication::TeXworks,
        PushApplication::TeXShop,
        PushApplication::Texmaker,
        PushApplication::TeXstudio,
        PushApplication::Vim,
        PushApplication::WinEdt,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            PushApplication::LyxKile => "LyX/Kile",
            PushApplication::SublimeText => "Sublime Text",
            PushApplication::TeXworks => "TeXworks",
            PushApplication::TeXShop => "TeXShop",
            PushApplication::Texmaker => "Texmaker",
            PushApplication::TeXstudio => "TeXstudio",
            PushApplication::Vim => "Vim",
            PushApplication::WinEdt => "WinEdt",
        }
    }

    pub fn tooltip(&self) -> String {
        format!(
            "Push entries to external application ({})",
            self.display_name()
        )
    }

    /// Whether the configured prefix/delimiter/suffix wrap the pushed keys.
    /// Vim receives the comma-joined keys as typed text with no wrapping.
    pub fn needs_citation_formatting(&self) -> bool {
        !matches!(self, PushApplication::Vim)
    }

    /// Exact display-name match first, then ASCII case-insensitive.
    pub fn from_display_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .iter()
            .find(|app| app.display_name() == name)
            .or_else(|| {
                Self::ALL
                    .iter()
                    .find(|app| app.display_name().eq_ignore_ascii_case(name))
            })
            .copied()
    }

    pub fn cite_prefix<'a>(&self, prefs: &'a PushPreferences) -> &'a str {
        prefs.cite_command.prefix()
    }

    pub fn delimiter<'a>(&self, prefs: &'a PushPreferences) -> &'a str {
        prefs.cite_command.delimiter()
    }

    pub fn cite_suffix<'a>(&self, prefs: &'a PushPreferences) -> &'a str {
        prefs.cite_command.suffix()
    }

    /// Build the insertion command for `keys`.
    ///
    /// Pure: the same inputs always give the same command line, and nothing
    /// is read besides the arguments.
    pub fn build_command_line<S: AsRef<str>>(
        &self,
        keys: &[S],
        path: Option<&str>,
        prefs: &PushPreferences,
    ) -> CommandLine {
        let cite = &prefs.cite_command;
        let args = match self {
            PushApplication::LyxKile
            | PushApplication::SublimeText
            | PushApplication::TeXworks
            | PushApplication::TeXShop => {
                vec!["--insert-text".to_string(), cite.format(keys)]
            }
            PushApplication::Texmaker => vec!["-insert".to_string(), cite.format(keys)],
            PushApplication::TeXstudio => vec!["--insert-cite".to_string(), cite.format(keys)],
            PushApplication::Vim => {
                let raw = keys
                    .iter()
                    .map(AsRef::as_ref)
                    .collect::<Vec<&str>>()
                    .join(",");
                vec![
                    "--servername".to_string(),
                    prefs.vim_server.clone(),
                    "--remote-send".to_string(),
                    format!("{VIM_INSERT_PREFIX}{raw}"),
                ]
            }
            PushApplication::WinEdt => {
                let escaped: Vec<String> = keys
                    .iter()
                    .map(|key| escape_winedt_key(key.as_ref()))
                    .collect();
                vec![format!("\"[InsText('{}');]\"", cite.format(&escaped))]
            }
        };

        CommandLine {
            program: path.map(str::to_string),
            args,
        }
    }
}

/// WinEdt string literals are single-quoted; a quote inside is doubled.
pub fn escape_winedt_key(key: &str) -> String {
    key.replace('\'', "''")
}

impl fmt::Display for PushApplication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for PushApplication {
    type Err = UnknownApplication;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_display_name(s).ok_or_else(|| UnknownApplication(s.to_string()))
    }
}
