//! Single chat message: avatar badge plus text bubble.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure render of one message. User messages mirror the layout (avatar on
//! the right) and switch to the user colour scheme.

#[cfg(test)]
#[path = "message_bubble_test.rs"]
mod message_bubble_test;

use leptos::prelude::*;
use time::OffsetDateTime;

use crate::util::clock::{HourCycle, format_clock};

/// Chat message bubble.
#[component]
pub fn MessageBubble(
    #[prop(into)] message: String,
    is_user: bool,
    timestamp: OffsetDateTime,
    #[prop(optional)] hour_cycle: HourCycle,
) -> impl IntoView {
    let time_label = format_clock(timestamp, hour_cycle);

    view! {
        <div class=row_class(is_user)>
            <span class=avatar_class(is_user) aria-hidden="true">{avatar_label(is_user)}</span>
            <div class=bubble_class(is_user)>
                <p class="message-bubble__text">{message}</p>
                <span class="message-bubble__time">{time_label}</span>
            </div>
        </div>
    }
}

fn avatar_label(is_user: bool) -> &'static str {
    if is_user { "U" } else { "AI" }
}

fn row_class(is_user: bool) -> &'static str {
    if is_user {
        "message-row message-row--user"
    } else {
        "message-row message-row--assistant"
    }
}

fn avatar_class(is_user: bool) -> &'static str {
    if is_user {
        "message-avatar message-avatar--user"
    } else {
        "message-avatar message-avatar--assistant"
    }
}

fn bubble_class(is_user: bool) -> &'static str {
    if is_user {
        "message-bubble message-bubble--user"
    } else {
        "message-bubble message-bubble--assistant"
    }
}
