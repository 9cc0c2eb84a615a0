//! Diagnostic reporting to stderr
//!
//! Non-fatal warnings (an unreadable directory during a walk) and fatal
//! errors share one reporter so quiet mode and color choice are configured
//! once, at construction, instead of through process-wide state.

use std::io::{self, IsTerminal, Write};
use std::path::Path;
use std::process;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Writes diagnostics to stderr.
#[derive(Debug, Clone)]
pub struct Reporter {
    quiet: bool,
    color: ColorChoice,
}

impl Reporter {
    /// Create a reporter; `quiet` suppresses non-fatal warnings.
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            color: ColorChoice::Never,
        }
    }

    /// Set the color choice for the warning/error tags.
    pub fn with_color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }

    /// Report a non-fatal failure with its path context. No-op when quiet.
    pub fn warn(&self, context: &Path, err: &io::Error) {
        if self.quiet {
            return;
        }
        // Best effort; a failing stderr must not end the traversal.
        let _ = self.write_tagged("warning", Color::Yellow, &format!(
            "{}: {}",
            context.display(),
            err
        ));
    }

    /// Report a fatal failure and terminate the process with status 1.
    pub fn fatal(&self, message: &str) -> ! {
        let _ = io::stdout().flush();
        let _ = self.write_tagged("error", Color::Red, message);
        process::exit(1);
    }

    fn write_tagged(&self, tag: &str, color: Color, message: &str) -> io::Result<()> {
        let mut stderr = StandardStream::stderr(self.color);
        stderr.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
        write!(stderr, "vwalk: {}:", tag)?;
        stderr.reset()?;
        writeln!(stderr, " {}", message)
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(false)
    }
}

/// Decide whether stderr diagnostics should be colored in auto mode.
///
/// Respects the NO_COLOR and FORCE_COLOR environment variables
/// (https://no-color.org/) and TERM=dumb before falling back to a TTY check.
pub fn auto_color_choice() -> ColorChoice {
    if std::env::var_os("NO_COLOR").is_some() {
        return ColorChoice::Never;
    }
    if std::env::var_os("FORCE_COLOR").is_some() {
        return ColorChoice::Always;
    }
    if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
        return ColorChoice::Never;
    }
    if io::stderr().is_terminal() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}
