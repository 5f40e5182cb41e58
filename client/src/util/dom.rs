//! Browser-backed sweep target and timer.
//!
//! Requires a browser environment; compiled only with the `hydrate` feature.

use std::time::Duration;

use gloo_timers::callback::Interval;
use wasm_bindgen::JsCast;

use crate::util::sweep::{IntervalScheduler, SweepError, SweepTarget, marker_selector};

/// The live `window.document`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentTarget;

impl SweepTarget for DocumentTarget {
    fn remove_marked(&self, marker: &str) -> Result<usize, SweepError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(SweepError::NoDocument)?;
        // `querySelectorAll` returns a static list, so removal while
        // iterating is safe.
        let nodes = document
            .query_selector_all(&marker_selector(marker))
            .map_err(|e| SweepError::Query(format!("{e:?}")))?;

        let mut removed = 0;
        for index in 0..nodes.length() {
            let Some(node) = nodes.item(index) else {
                continue;
            };
            let element = node
                .dyn_into::<web_sys::Element>()
                .map_err(|n| SweepError::Detach(format!("{n:?}")))?;
            element.remove();
            removed += 1;
        }
        Ok(removed)
    }
}

/// Recurring timers via `setInterval`. Dropping the `Interval` clears it.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooScheduler;

impl IntervalScheduler for GlooScheduler {
    type Handle = Interval;

    fn schedule(&self, period: Duration, mut tick: Box<dyn FnMut()>) -> Interval {
        let millis = u32::try_from(period.as_millis()).unwrap_or(u32::MAX);
        Interval::new(millis, move || tick())
    }
}
