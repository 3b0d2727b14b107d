/// ANSI color helpers for terminal output.
use ansi_term::Colour;
use std::io::IsTerminal;

/// `--color` choice, resolved once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Colors for stdout.
    pub fn enabled(self) -> bool {
        self.resolve(std::io::stdout().is_terminal())
    }

    /// Colors for stderr (diagnostics and status messages).
    pub fn enabled_stderr(self) -> bool {
        self.resolve(std::io::stderr().is_terminal())
    }

    /// Auto enables colors only on a terminal and when `NO_COLOR` is unset.
    pub fn resolve(self, is_terminal: bool) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => std::env::var_os("NO_COLOR").is_none() && is_terminal,
        }
    }
}

/// Paint `value` with `colour` when `enabled`, return it verbatim otherwise.
pub fn paint(value: &str, colour: Colour, enabled: bool) -> String {
    if enabled {
        colour.paint(value).to_string()
    } else {
        value.to_string()
    }
}

/// Bold variant of [`paint`], used for table titles and headers.
pub fn paint_bold(value: &str, colour: Option<Colour>, enabled: bool) -> String {
    if !enabled {
        return value.to_string();
    }
    match colour {
        Some(c) => c.bold().paint(value).to_string(),
        None => ansi_term::Style::new().bold().paint(value).to_string(),
    }
}
