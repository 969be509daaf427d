use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{RobotsError, Result};
use crate::types::{ParsedRobots, RuleGroup, RuleKind, TextRule};

/// Regex pattern for robots.txt lines
/// Format: field: value
static LINE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z][A-Za-z_\-]*)\s*:\s*(.*)$")
        .expect("LINE_PATTERN: hardcoded regex is invalid")
});

/// Reduce a user-agent string to its lowercased product token.
///
/// "Googlebot/2.1 (+http://www.google.com/bot.html)" -> "googlebot"
pub fn product_token(agent: &str) -> String {
    let token = agent.split('/').next().unwrap_or_default();
    let token = token.split_whitespace().next().unwrap_or_default();
    token.to_lowercase()
}

/// Parse robots.txt text into user-agent groups.
pub fn parse_robots(text: &str) -> Result<ParsedRobots> {
    let mut parsed = ParsedRobots::default();
    let mut current: Option<RuleGroup> = None;
    // Set while consecutive user-agent lines are still extending a group
    let mut collecting_agents = false;

    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    for (line_num, line) in text.lines().enumerate() {
        let line_num = line_num + 1;

        let line = if let Some(comment_pos) = line.find('#') {
            &line[..comment_pos]
        } else {
            line
        };
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        let captures = LINE_PATTERN
            .captures(line)
            .ok_or_else(|| RobotsError::ParseErrorAtLine {
                line: line_num,
                message: format!("Invalid directive format: {}", line),
            })?;
        let field = captures[1].to_ascii_lowercase();
        let value = captures[2].trim();

        match field.as_str() {
            "user-agent" => {
                let token = product_token(value);
                if token.is_empty() {
                    warn!(line = line_num, "empty user-agent ignored");
                    continue;
                }
                if !collecting_agents {
                    if let Some(group) = current.take() {
                        parsed.groups.push(group);
                    }
                }
                current
                    .get_or_insert_with(RuleGroup::default)
                    .user_agents
                    .push(token);
                collecting_agents = true;
            }
            "allow" | "disallow" => {
                let Some(group) = current.as_mut() else {
                    warn!(line = line_num, "rule outside of any user-agent group ignored");
                    continue;
                };
                collecting_agents = false;
                if value.is_empty() {
                    continue;
                }
                let kind = field.parse::<RuleKind>()?;
                group.rules.push(TextRule {
                    kind,
                    pattern: value.to_string(),
                    line_num,
                });
            }
            "crawl-delay" => {
                let Some(group) = current.as_mut() else {
                    warn!(line = line_num, "crawl-delay outside of any user-agent group ignored");
                    continue;
                };
                collecting_agents = false;
                group.crawl_delay = Some(parse_crawl_delay(value, line_num)?);
            }
            "sitemap" => {
                if !value.is_empty() {
                    parsed.sitemaps.push(value.to_string());
                }
            }
            _ => {
                debug!(line = line_num, field = %field, "unsupported directive skipped");
            }
        }
    }

    if let Some(group) = current {
        parsed.groups.push(group);
    }

    Ok(parsed)
}

/// Parse robots.txt from a file.
pub fn parse_robots_from_file(path: impl AsRef<Path>) -> Result<ParsedRobots> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| {
        RobotsError::ParseError(format!(
            "Failed to read robots file '{}': {}",
            path.display(),
            e
        ))
    })?;
    parse_robots(&text)
}

fn parse_crawl_delay(value: &str, line_num: usize) -> Result<f64> {
    let delay: f64 = value.parse().map_err(|_| RobotsError::ParseErrorAtLine {
        line: line_num,
        message: format!("Invalid crawl-delay: {}", value),
    })?;
    if !delay.is_finite() || delay < 0.0 {
        return Err(RobotsError::ParseErrorAtLine {
            line: line_num,
            message: format!("Crawl-delay out of range: {}", value),
        });
    }
    Ok(delay)
}
