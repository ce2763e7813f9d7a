// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the postsearch CLI.
//!
//! OneDark for dark terminals, One Light for light ones. Detection tries
//! `POSTSEARCH_THEME` first, then `COLORFGBG`, then defaults to dark.
//! Respects `NO_COLOR` and goes plain when stdout isn't a terminal, so the
//! output is safe to pipe into a CI log.

use std::sync::OnceLock;
use std::time::Duration;

use postsearch::build::BuildReport;
use postsearch::search::SearchHit;
use postsearch::summary::ArtifactSummary;

/// Width between │ and │ (excluding border chars).
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
    if let Ok(theme) = std::env::var("POSTSEARCH_THEME") {
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
// PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════

fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const MAGENTA: (u8, u8, u8) = (198, 120, 221); // #c678dd
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const MAGENTA: (u8, u8, u8) = (166, 38, 164); // #a626a4
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            rgb(match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            })
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(MAGENTA);
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

/// Apply theme color with optional modifiers, or nothing when plain.
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

fn border(color_fn: fn() -> String) -> String {
    if use_colors() {
        color_fn()
    } else {
        String::new()
    }
}

fn reset() -> &'static str {
    if use_colors() {
        RESET
    } else {
        ""
    }
}

/// Visible length, ANSI escapes excluded.
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
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// │ content          │
pub fn row(content: &str) {
    let b = border(GRAY);
    let pad = BOX_WIDTH.saturating_sub(visible_len(content) + 1);
    println!("{b}│{r} {content}{}{b}│{r}", " ".repeat(pad), r = reset());
}

/// ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    section_line('┌', '┐', label);
}

/// ├─ LABEL ──────────┤
pub fn section_mid(label: &str) {
    section_line('├', '┤', label);
}

fn section_line(left: char, right: char, label: &str) {
    let b = border(GRAY);
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{b}{left}{r}{label_part}{b}{}{right}{r}",
        "─".repeat(remaining),
        r = reset()
    );
}

/// └──────────────────┘
pub fn section_bot() {
    println!("{}└{}┘{}", border(GRAY), "─".repeat(BOX_WIDTH), reset());
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

pub fn format_size(bytes: usize) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / 1024.0 / 1024.0)
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}

/// Shorten to `max_chars` characters, ending in "…" when cut.
pub fn ellipsize(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{kept}…")
}

/// Score, colored by how strong a match it is.
pub fn score_value(score: f64) -> String {
    let text = format!("{:>7.2}", score);
    let color: fn() -> String = if score >= 20.0 {
        GREEN
    } else if score >= 5.0 {
        YELLOW
    } else {
        GRAY
    };
    themed(color, &[], &text)
}

/// Comma-separated list, or a dim "none".
pub fn list_or_none(items: &[String]) -> String {
    if items.is_empty() {
        themed(GRAY, &[DIM], "none")
    } else {
        items.join(", ")
    }
}

fn label(name: &str) -> String {
    themed(GRAY, &[], &format!("{:<12}", name))
}

// ═══════════════════════════════════════════════════════════════════════════
// COMMAND OUTPUT
// ═══════════════════════════════════════════════════════════════════════════

pub fn print_build_report(report: &BuildReport, elapsed: Duration) {
    section_top("BUILD");
    row(&format!(
        "{}{}",
        label("artifact"),
        themed(BLUE, &[], &report.artifact_path.display().to_string())
    ));
    row(&format!(
        "{}{}",
        label("entries"),
        themed(GREEN, &[BOLD], &report.entries.to_string())
    ));
    row(&format!("{}{}", label("unpublished"), report.unpublished));
    if report.skipped > 0 {
        row(&format!(
            "{}{}",
            label("skipped"),
            themed(YELLOW, &[BOLD], &report.skipped.to_string())
        ));
    }
    row(&format!("{}{}", label("size"), format_size(report.bytes)));
    row(&format!("{}{:.1?}", label("time"), elapsed));
    if report.degraded {
        section_mid("WARNING");
        row(&themed(
            RED,
            &[BOLD],
            "content unavailable, wrote an empty index",
        ));
    }
    section_bot();
}

pub fn print_summary(path: &str, bytes: usize, summary: &ArtifactSummary) {
    section_top("ARTIFACT");
    row(&format!("{}{}", label("file"), themed(BLUE, &[], path)));
    row(&format!("{}{}", label("size"), format_size(bytes)));
    row(&format!(
        "{}{}",
        label("entries"),
        themed(GREEN, &[BOLD], &summary.entries.to_string())
    ));
    row(&format!("{}{} chars", label("content"), summary.content_chars));
    row(&format!("{}{}", label("truncated"), summary.truncated));

    section_mid("TAXONOMY");
    for (name, values) in [
        ("tags", &summary.tags),
        ("categories", &summary.categories),
        ("series", &summary.series),
    ] {
        let text = ellipsize(&list_or_none(values), BOX_WIDTH - 14);
        row(&format!("{}{}", label(name), text));
    }
    section_bot();
}

pub fn print_results(query: &str, hits: &[SearchHit], route_prefix: &str, elapsed: Duration) {
    section_top(&format!("SEARCH \"{}\"", ellipsize(query, 40)));
    if hits.is_empty() {
        row(&themed(GRAY, &[], "no results"));
    }
    for (rank, hit) in hits.iter().enumerate() {
        row(&format!(
            "{:>2}. {} {}",
            rank + 1,
            score_value(hit.score),
            themed(MAGENTA, &[BOLD], &ellipsize(&hit.title, BOX_WIDTH - 16))
        ));
        row(&format!(
            "             {}",
            themed(BLUE, &[], &hit.path_under(route_prefix))
        ));
        if !hit.description.is_empty() {
            row(&format!(
                "             {}",
                themed(GRAY, &[], &ellipsize(&hit.description, BOX_WIDTH - 15))
            ));
        }
    }
    section_mid("STATS");
    row(&format!("{}{}", label("results"), hits.len()));
    row(&format!("{}{:.1?}", label("time"), elapsed));
    section_bot();
}
