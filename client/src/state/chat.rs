//! Chat message display records.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use time::OffsetDateTime;
use time::macros::datetime;

/// One message as the bubble renders it. Created per message by the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessageView {
    pub text: String,
    pub is_from_user: bool,
    pub sent_at: OffsetDateTime,
}

impl ChatMessageView {
    pub fn user(text: impl Into<String>, sent_at: OffsetDateTime) -> Self {
        Self { text: text.into(), is_from_user: true, sent_at }
    }

    pub fn assistant(text: impl Into<String>, sent_at: OffsetDateTime) -> Self {
        Self { text: text.into(), is_from_user: false, sent_at }
    }
}

/// Fixed conversation shown by the preview page. Timestamps are constant so
/// server and client render identical markup.
pub fn sample_conversation() -> Vec<ChatMessageView> {
    vec![
        ChatMessageView::user("Can you summarize today's standup?", datetime!(2026-10-14 14:05 UTC)),
        ChatMessageView::assistant(
            "Sure. The release shipped on time and the accessibility review passed.",
            datetime!(2026-10-14 14:06 UTC),
        ),
        ChatMessageView::user("Thanks!", datetime!(2026-10-14 14:07 UTC)),
        ChatMessageView::assistant("", datetime!(2026-10-14 14:07 UTC)),
    ]
}
