//! Block Kit payload for an incoming webhook.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Slack rejects section text longer than this many characters.
pub const SECTION_TEXT_LIMIT: usize = 3000;

/// Header shown above every summary.
pub const HEADER_TEXT: &str = "📋 Todo Summary Report";

/// Webhook request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlackMessage {
    /// Plain-text fallback for notifications and clients without blocks.
    pub text: String,
    /// Rendered layout.
    pub blocks: Vec<Block>,
}

/// A layout block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// Large bold title.
    Header {
        /// Must be `plain_text`.
        text: TextObject,
    },
    /// Horizontal rule.
    Divider,
    /// Body text.
    Section {
        /// Section content.
        text: TextObject,
    },
    /// Small muted line.
    Context {
        /// Context elements.
        elements: Vec<TextObject>,
    },
}

/// A text composition object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TextObject {
    /// Unformatted text.
    PlainText {
        /// Content.
        text: String,
        /// Render `:emoji:` codes.
        emoji: bool,
    },
    /// Slack markdown.
    Mrkdwn {
        /// Content.
        text: String,
    },
}

impl SlackMessage {
    /// Build the summary message, stamped with `generated_at`.
    #[must_use]
    pub fn summary(summary: &str, generated_at: DateTime<Utc>) -> Self {
        let body = truncate(summary, SECTION_TEXT_LIMIT);
        Self {
            text: format!("{HEADER_TEXT}\n{body}"),
            blocks: vec![
                Block::Header {
                    text: TextObject::PlainText {
                        text: HEADER_TEXT.to_string(),
                        emoji: true,
                    },
                },
                Block::Divider,
                Block::Section {
                    text: TextObject::Mrkdwn { text: body },
                },
                Block::Context {
                    elements: vec![TextObject::Mrkdwn {
                        text: format!(
                            "*Generated on:* {}",
                            generated_at.format("%Y-%m-%d %H:%M:%S UTC")
                        ),
                    }],
                },
            ],
        }
    }
}

/// Cut `text` to at most `limit` characters, marking the cut with `…`.
fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(limit.saturating_sub(1)).collect();
    cut.push('…');
    cut
}
