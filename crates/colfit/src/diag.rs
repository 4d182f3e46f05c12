//! Leveled diagnostics for the command line tool.
//!
//! Diagnostics never go to stdout, which carries only the reformatted report.
//! They are written to stderr by default, or to a log file with `--log`.

use std::fmt::Display;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use console::style;

/// How much the tool reports about its work.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    /// Errors only.
    Quiet,
    /// Errors and warnings.
    #[default]
    Warning,
    /// Also which lines were excluded and the computed widths.
    Info,
    /// Also which rule matched which field.
    Debug,
}

/// Diagnostic sink.
pub struct Diagnostics {
    level: Level,
    sink: Box<dyn Write>,
    styled: bool,
}

impl Diagnostics {
    /// Diagnostics on stderr, styled when stderr is a terminal.
    pub fn stderr(level: Level) -> Self {
        Self {
            level,
            sink: Box::new(io::stderr()),
            styled: console::Term::stderr().features().colors_supported(),
        }
    }

    /// Diagnostics written to a file, truncating it first.
    pub fn to_file(level: Level, path: &Path) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self::to_writer(level, file))
    }

    /// Diagnostics written, unstyled, to any writer.
    pub fn to_writer(level: Level, writer: impl Write + 'static) -> Self {
        Self {
            level,
            sink: Box::new(writer),
            styled: false,
        }
    }

    /// Diagnostics that go nowhere.
    pub fn silent() -> Self {
        Self::to_writer(Level::Quiet, io::sink())
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// Returns `true` if messages at `level` are written.
    pub fn enabled(&self, level: Level) -> bool {
        level <= self.level
    }

    /// Reports a fatal error. Always written, whatever the level.
    pub fn error(&mut self, message: impl Display) {
        let prefix = if self.styled {
            style("error:").for_stderr().red().bold().to_string()
        } else {
            "error:".to_string()
        };
        self.write_line(&prefix, message);
    }

    pub fn warn(&mut self, message: impl Display) {
        if self.enabled(Level::Warning) {
            let prefix = if self.styled {
                style("warning:").for_stderr().yellow().to_string()
            } else {
                "warning:".to_string()
            };
            self.write_line(&prefix, message);
        }
    }

    pub fn info(&mut self, message: impl Display) {
        if self.enabled(Level::Info) {
            self.write_line("", message);
        }
    }

    pub fn debug(&mut self, message: impl Display) {
        if self.enabled(Level::Debug) {
            self.write_line("", message);
        }
    }

    // A diagnostic that cannot be written is dropped; the report itself is unaffected.
    fn write_line(&mut self, prefix: &str, message: impl Display) {
        let _ = if prefix.is_empty() {
            writeln!(self.sink, "{message}")
        } else {
            writeln!(self.sink, "{prefix} {message}")
        };
        let _ = self.sink.flush();
    }
}
