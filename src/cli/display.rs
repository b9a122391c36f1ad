// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display for the docsift CLI.
//!
//! Results are HTML fragments meant for a browser. In a terminal the markup is
//! noise, so snippets are flattened: `<mark>` becomes a highlight color, `<br>`
//! becomes a line break, every other tag disappears and the common entities are
//! decoded.
//!
//! Colors follow the terminal: OneDark for dark backgrounds, One Light for light
//! ones. `DOCSIFT_THEME` forces a theme, `COLORFGBG` is the fallback hint, and
//! `NO_COLOR` or a non-TTY stdout turns color off entirely.

use std::sync::{LazyLock, OnceLock};

use docsift::build::format_bytes;
use docsift::inspect::IndexStats;
use docsift::search::highlight::{MARK_CLOSE, MARK_OPEN};
use docsift::RankedResult;
use regex::Regex;

// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 72;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("DOCSIFT_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // "fg;bg", where a bg of 7 or above (except 8) is a light background
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

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

mod onedark {
    pub const GREEN: (u8, u8, u8) = (152, 195, 121);
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123);
    pub const BLUE: (u8, u8, u8) = (97, 175, 239);
    pub const CYAN: (u8, u8, u8) = (86, 182, 194);
    pub const GRAY: (u8, u8, u8) = (92, 99, 112);
}

mod onelight {
    pub const GREEN: (u8, u8, u8) = (80, 161, 79);
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1);
    pub const BLUE: (u8, u8, u8) = (64, 120, 242);
    pub const CYAN: (u8, u8, u8) = (1, 132, 188);
    pub const GRAY: (u8, u8, u8) = (160, 161, 167);
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(CYAN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

pub fn use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply a theme color with optional modifiers, or nothing without a TTY.
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Visible length, excluding ANSI escapes.
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

// ═══════════════════════════════════════════════════════════════════════════
// SNIPPET FLATTENING
// ═══════════════════════════════════════════════════════════════════════════

static ANY_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^<>]*>").expect("tag pattern is valid"));

/// Render a snippet fragment as terminal text.
///
/// `mark_style` wraps each highlighted run; pass `("[", "]")` for plain output.
pub fn flatten_snippet(html: &str, mark_style: (&str, &str)) -> String {
    let text = html
        .replace("<br>", "\n")
        .replace(MARK_OPEN, "\u{1}")
        .replace(MARK_CLOSE, "\u{2}");
    let text = ANY_TAG.replace_all(&text, "");
    let text = text
        .replace('\u{1}', mark_style.0)
        .replace('\u{2}', mark_style.1);
    decode_entities(&text)
}

fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let border = GRAY();
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!("{}│{}{}{}{}│{}", border, RESET, content, " ".repeat(pad), border, RESET);
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let border = GRAY();
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!("{}┌{}{}{}{}┐{}", border, RESET, label_part, border, "─".repeat(remaining), RESET);
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    println!("{}└{}┘{}", GRAY(), "─".repeat(BOX_WIDTH), RESET);
}

// ═══════════════════════════════════════════════════════════════════════════
// COMMAND OUTPUT
// ═══════════════════════════════════════════════════════════════════════════

/// Print the results of `docsift search`.
pub fn print_results(query: &str, results: &[RankedResult]) {
    if results.is_empty() {
        println!("{}", themed(GRAY, &[], &format!("No results for \"{}\"", query)));
        return;
    }

    let mark_open = if use_colors() { format!("{}{}", BOLD, YELLOW()) } else { "[".to_string() };
    let mark_close = if use_colors() { RESET.to_string() } else { "]".to_string() };

    for (rank, result) in results.iter().enumerate() {
        println!(
            "{} {}  {}",
            themed(GRAY, &[], &format!("{:>2}.", rank + 1)),
            themed(GREEN, &[BOLD], &result.title),
            themed(BLUE, &[], &result.url)
        );
        for snippet in &result.snippets {
            let text = flatten_snippet(snippet, (&mark_open, &mark_close));
            for line in text.lines().filter(|l| !l.trim().is_empty()) {
                println!("      {}", line.trim());
            }
            println!();
        }
    }
}

/// Print the report of `docsift inspect`.
pub fn print_inspect(path: &str, stats: &IndexStats) {
    section_top(path);
    row(&format!("  entries     {}", stats.entries));
    row(&format!("  untitled    {}", stats.untitled));
    if let Some((url, len)) = &stats.largest {
        row(&format!("  largest     {} ({})", url, format_bytes(*len)));
    }
    row(&format!("  size        {}", format_bytes(stats.bytes)));
    let ratio = if stats.bytes == 0 {
        0.0
    } else {
        stats.brotli_bytes as f64 / stats.bytes as f64 * 100.0
    };
    row(&format!(
        "  brotli      {} ({:.0}%)",
        format_bytes(stats.brotli_bytes),
        ratio
    ));
    row(&format!("  crc32       {:08x}", stats.checksum));
    if let Some(url) = &stats.duplicate_url {
        row(&themed(YELLOW, &[BOLD], &format!("  duplicate   {}", url)));
    }
    section_bot();
}
