use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

/// Icons
pub const ICON_INFO: &str = "ℹ️";
pub const ICON_OK: &str = "✅";
pub const ICON_WARN: &str = "⚠️";
pub const ICON_ERR: &str = "❌";

// Set once from `--color` at startup. Plain until then.
static STDOUT_STYLED: AtomicBool = AtomicBool::new(false);
static STDERR_STYLED: AtomicBool = AtomicBool::new(false);

pub fn set_styled(stdout: bool, stderr: bool) {
    STDOUT_STYLED.store(stdout, Ordering::Relaxed);
    STDERR_STYLED.store(stderr, Ordering::Relaxed);
}

/// `<icon> <msg>`, with the icon colored when `styled`.
pub fn format_message<T: fmt::Display>(color: &str, icon: &str, msg: T, styled: bool) -> String {
    if styled {
        format!("{}{}{} {}{}", color, BOLD, icon, RESET, msg)
    } else {
        format!("{} {}", icon, msg)
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    let styled = STDOUT_STYLED.load(Ordering::Relaxed);
    println!("{}", format_message(FG_BLUE, ICON_INFO, msg, styled));
}

pub fn success<T: fmt::Display>(msg: T) {
    let styled = STDOUT_STYLED.load(Ordering::Relaxed);
    println!("{}", format_message(FG_GREEN, ICON_OK, msg, styled));
}

pub fn warning<T: fmt::Display>(msg: T) {
    let styled = STDERR_STYLED.load(Ordering::Relaxed);
    eprintln!("{}", format_message(FG_YELLOW, ICON_WARN, msg, styled));
}

pub fn error<T: fmt::Display>(msg: T) {
    let styled = STDERR_STYLED.load(Ordering::Relaxed);
    eprintln!("{}", format_message(FG_RED, ICON_ERR, msg, styled));
}
