//! Invisible background component that runs the DOM sweeper.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once by the page shell. In the browser it starts the sweeper on
//! mount and drops it in `on_cleanup`, which cancels the interval. Server
//! rendering has no DOM, so the SSR path renders nothing and schedules
//! nothing.

use leptos::prelude::*;

use crate::util::sweep::SweeperConfig;

/// Periodic cleanup of nodes tagged with the removal marker.
#[component]
pub fn PeriodicDomSweeper(#[prop(optional)] config: Option<SweeperConfig>) -> impl IntoView {
    let config = config.unwrap_or_default();

    #[cfg(feature = "hydrate")]
    {
        use crate::util::dom::{DocumentTarget, GlooScheduler};
        use crate::util::sweep::start_sweeper;

        let state = start_sweeper(&config, DocumentTarget, &GlooScheduler);
        let slot = StoredValue::new_local(Some(state));
        on_cleanup(move || {
            slot.update_value(|state| {
                if let Some(state) = state.take() {
                    state.stop();
                }
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
    }
}
