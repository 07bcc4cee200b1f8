//! ANSI color helpers for CLI output.
//!
//! Every helper takes an `enabled` flag so `output.color = false` in the
//! config yields plain text.

fn paint(code: &str, s: &str, enabled: bool) -> String {
    if enabled {
        format!("\x1b[{}m{}\x1b[0m", code, s)
    } else {
        s.to_string()
    }
}

pub fn green(s: &str, enabled: bool) -> String {
    paint("32", s, enabled)
}

pub fn red(s: &str, enabled: bool) -> String {
    paint("31", s, enabled)
}

pub fn bold(s: &str, enabled: bool) -> String {
    paint("1", s, enabled)
}

pub fn gray(s: &str, enabled: bool) -> String {
    paint("90", s, enabled)
}

/// Right-aligned, green, bold status label.
pub fn status_label(label: &str, enabled: bool) -> String {
    paint("1;32", &format!("{:>12}", label), enabled)
}
