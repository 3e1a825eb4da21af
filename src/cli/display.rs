// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the folio CLI.
//!
//! OneDark for dark terminals, One Light for light ones. The theme comes from
//! `FOLIO_THEME` when set, then `COLORFGBG`, and defaults to dark. Respects
//! `NO_COLOR` and turns colors off entirely when stdout is not a TTY.

use std::sync::OnceLock;

use folio::fold_case;

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("FOLIO_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; bg 7 and up (except 8) is a light background
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(Ok(bg)) = colorfgbg.split(';').next_back().map(str::parse::<u8>) {
            if bg >= 7 && bg != 8 {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

fn yellow() -> String {
    rgb(match theme() {
        Theme::Dark => (229, 192, 123), // #e5c07b
        Theme::Light => (193, 132, 1),  // #c18401
    })
}

fn gray() -> String {
    rgb(match theme() {
        Theme::Dark => (92, 99, 112),    // #5c6370
        Theme::Light => (160, 161, 167), // #a0a1a7
    })
}

fn cyan() -> String {
    rgb(match theme() {
        Theme::Dark => (86, 182, 194), // #56b6c2
        Theme::Light => (1, 132, 188), // #0184bc
    })
}

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

fn paint(color: &str, text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", color, text, RESET)
    } else {
        text.to_string()
    }
}

pub fn title(text: &str) -> String {
    paint(&format!("{BOLD}{}", cyan()), text)
}

pub fn dim(text: &str) -> String {
    paint(&gray(), text)
}

/// Highlight every case-insensitive occurrence of `needle` in `snippet`.
///
/// Folding keeps byte offsets intact, so positions found in the folded
/// snippet slice the original directly.
pub fn highlight(snippet: &str, needle: &str) -> String {
    if needle.is_empty() || !use_colors() {
        return snippet.to_string();
    }

    let folded = fold_case(snippet);
    let needle = fold_case(needle);
    let color = format!("{BOLD}{}", yellow());

    let mut out = String::with_capacity(snippet.len());
    let mut last = 0;
    for (start, _) in folded.match_indices(&needle) {
        if start < last {
            continue;
        }
        let end = start + needle.len();
        out.push_str(&snippet[last..start]);
        out.push_str(&color);
        out.push_str(&snippet[start..end]);
        out.push_str(RESET);
        last = end;
    }
    out.push_str(&snippet[last..]);
    out
}

/// Collapse runs of whitespace so a snippet prints on one logical line.
pub fn flatten(snippet: &str) -> String {
    snippet.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn format_size(bytes: usize) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}

pub fn timing_ms(value: f64) -> String {
    if value < 1.0 {
        format!("{:.0}µs", value * 1000.0)
    } else {
        format!("{:.1}ms", value)
    }
}
