//! Preview application shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! Parent view that mounts each component independently: skip-links first,
//! then the navigation and main landmarks they target, a gradient-bordered
//! conversation, and the background sweeper. `shell` wraps the app in the
//! HTML document served by the SSR host.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{Route, Router, Routes};

use crate::components::dom_sweeper::PeriodicDomSweeper;
use crate::components::gradient_border::GradientBorder;
use crate::components::message_bubble::MessageBubble;
use crate::components::skip_links::SkipLinks;
use crate::state::chat::sample_conversation;
use crate::util::sweep::SweeperConfig;

/// Full HTML document for server rendering.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let sweeper_config = SweeperConfig::from_build_env();

    view! {
        <Stylesheet id="leptos" href="/pkg/chat-ui.css"/>
        <Title text="Chat UI"/>
        <SkipLinks/>
        <Router>
            <nav id="navigation" class="chat-nav" aria-label="Primary">
                <a class="chat-nav__link" href="/">"Conversation"</a>
            </nav>
            <main id="main-content" class="chat-main" tabindex="-1">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=ConversationPage/>
                </Routes>
            </main>
        </Router>
        <PeriodicDomSweeper config=sweeper_config/>
    }
}

/// Sample conversation rendered inside a gradient border.
#[component]
fn ConversationPage() -> impl IntoView {
    let messages = sample_conversation();

    view! {
        <GradientBorder class="chat-card" border_width=2.0 border_radius="1rem">
            <section class="chat-log" aria-label="Conversation">
                {messages
                    .into_iter()
                    .map(|m| {
                        view! { <MessageBubble message=m.text is_user=m.is_from_user timestamp=m.sent_at/> }
                    })
                    .collect_view()}
            </section>
        </GradientBorder>
    }
}
