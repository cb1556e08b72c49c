//! Terminal rendering for the tutor's lightweight markup
//!
//! Supported subset: fenced code blocks, inline code spans, bold spans,
//! `#` headings and line breaks. Anything else passes through unchanged.

use colored::Colorize;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static INLINE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`]+)`").expect("inline code pattern is valid"));

static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").expect("bold pattern is valid"));

const FENCE: &str = "```";

/// Renders tutor markup for a terminal
///
/// With color enabled spans are styled; without it the markup characters are
/// stripped so the text reads cleanly on a plain terminal.
#[derive(Debug, Clone, Copy)]
pub struct MarkupRenderer {
    color: bool,
}

impl MarkupRenderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn color(&self) -> bool {
        self.color
    }

    pub fn render(&self, text: &str) -> String {
        let mut lines = Vec::new();
        let mut in_code = false;

        for line in text.lines() {
            if let Some(lang) = line.trim_start().strip_prefix(FENCE) {
                in_code = !in_code;
                if in_code && !lang.trim().is_empty() {
                    lines.push(self.code_label(lang.trim()));
                }
                continue;
            }

            if in_code {
                lines.push(self.code_line(line));
            } else {
                lines.push(self.text_line(line));
            }
        }

        lines.join("\n")
    }

    fn code_label(&self, lang: &str) -> String {
        if self.color {
            format!("  {}", lang.dimmed().italic())
        } else {
            format!("  [{}]", lang)
        }
    }

    fn code_line(&self, line: &str) -> String {
        if self.color {
            format!("  {} {}", "│".dimmed(), line.yellow())
        } else {
            format!("    {}", line)
        }
    }

    fn text_line(&self, line: &str) -> String {
        if let Some(heading) = line.strip_prefix("# ") {
            return if self.color {
                heading.bold().underline().to_string()
            } else {
                heading.to_uppercase()
            };
        }

        let color = self.color;
        let with_code = INLINE_CODE.replace_all(line, |caps: &Captures| {
            if color {
                caps[1].cyan().to_string()
            } else {
                caps[1].to_string()
            }
        });
        BOLD.replace_all(&with_code, |caps: &Captures| {
            if color {
                caps[1].bold().to_string()
            } else {
                caps[1].to_string()
            }
        })
        .into_owned()
    }
}
