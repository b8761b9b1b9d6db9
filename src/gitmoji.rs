//! src/gitmoji.rs
//! Prefixes a Conventional Commit summary with its gitmoji.

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

const GITMOJI: &[(&str, &str)] = &[
    ("feat", "✨"),
    ("fix", "🐛"),
    ("docs", "📝"),
    ("style", "🎨"),
    ("refactor", "♻️"),
    ("perf", "⚡️"),
    ("test", "✅"),
    ("build", "📦️"),
    ("ci", "👷"),
    ("chore", "🔧"),
    ("revert", "⏪️"),
];

lazy_static! {
    static ref COMMIT_TYPE_RE: Regex =
        Regex::new(r"^(?P<type>[A-Za-z]+)(?:\([^)]*\))?!?:").unwrap();
}

pub fn emoji_for(commit_type: &str) -> Option<&'static str> {
    let commit_type = commit_type.to_lowercase();
    GITMOJI
        .iter()
        .find(|(t, _)| *t == commit_type)
        .map(|(_, emoji)| *emoji)
}

// Compare without the variation selector so "⚡" and "⚡️" both count.
fn starts_with_gitmoji(line: &str) -> bool {
    GITMOJI.iter().any(|(_, emoji)| {
        let bare = emoji.trim_end_matches('\u{fe0f}');
        line.starts_with(bare)
    })
}

/// Adds the emoji for the detected type to the first non-empty line.
/// Unknown types and already decorated messages come back unchanged.
pub fn add_gitmoji(message: &str) -> String {
    let Some(summary) = message.lines().find(|l| !l.trim().is_empty()) else {
        return message.to_string();
    };
    let summary = summary.trim_start();

    if starts_with_gitmoji(summary) {
        debug!("message already carries a gitmoji");
        return message.to_string();
    }

    let emoji = COMMIT_TYPE_RE
        .captures(summary)
        .and_then(|caps| emoji_for(&caps["type"]));

    match emoji {
        Some(emoji) => {
            let decorated = format!("{emoji} {summary}");
            message.replacen(summary, &decorated, 1)
        }
        None => {
            debug!("no gitmoji for summary '{summary}'");
            message.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_types_are_decorated() {
        assert_eq!(add_gitmoji("feat: add login"), "✨ feat: add login");
        assert_eq!(add_gitmoji("fix(api): handle nil"), "🐛 fix(api): handle nil");
        assert_eq!(add_gitmoji("refactor!: drop v1"), "♻️ refactor!: drop v1");
    }

    #[test]
    fn test_body_is_preserved() {
        let msg = "docs: update readme\n\nMention the new flag.";
        assert_eq!(add_gitmoji(msg), "📝 docs: update readme\n\nMention the new flag.");
    }

    #[test]
    fn test_unknown_or_untyped_message_is_unchanged() {
        assert_eq!(add_gitmoji("wip: stuff"), "wip: stuff");
        assert_eq!(add_gitmoji("Update things"), "Update things");
        assert_eq!(add_gitmoji(""), "");
    }

    #[test]
    fn test_decoration_is_idempotent() {
        let once = add_gitmoji("perf: cache lookups");
        assert_eq!(add_gitmoji(&once), once);
        assert_eq!(add_gitmoji("⚡ perf: cache lookups"), "⚡ perf: cache lookups");
    }

    #[test]
    fn test_leading_blank_lines_are_skipped() {
        assert_eq!(add_gitmoji("\n\nchore: bump deps"), "\n\n🔧 chore: bump deps");
    }
}
