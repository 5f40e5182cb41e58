//! Hour:minute formatting for message timestamps.
//!
//! The caller chooses the display offset by converting `OffsetDateTime`
//! before rendering; formatting only reads the wall-clock fields.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use time::OffsetDateTime;

/// Clock convention used when printing hour and minute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HourCycle {
    /// `02:05 PM`
    #[default]
    H12,
    /// `14:05`
    H23,
}

/// Locales (language or language-region prefixes) that print a 12-hour clock.
const TWELVE_HOUR_LOCALES: &[&str] = &[
    "en", "en-us", "en-ca", "en-au", "en-nz", "en-in", "en-ph", "es-us", "hi",
];

impl HourCycle {
    /// Resolve the hour cycle for a BCP-47 tag such as `en-US` or `de-DE`.
    pub fn for_locale(tag: &str) -> Self {
        let normalized = tag.trim().replace('_', "-").to_ascii_lowercase();
        if normalized.is_empty() {
            return Self::default();
        }
        let language = normalized.split('-').next().unwrap_or_default();
        let exact = TWELVE_HOUR_LOCALES.contains(&normalized.as_str());
        // A bare language tag matches; a language with a foreign region
        // (e.g. `en-GB`) only matches when listed.
        let bare = normalized == language && TWELVE_HOUR_LOCALES.contains(&language);
        if exact || bare { Self::H12 } else { Self::H23 }
    }
}

/// Format the hour and minute of `ts` according to `cycle`.
pub fn format_clock(ts: OffsetDateTime, cycle: HourCycle) -> String {
    let hour = ts.hour();
    let minute = ts.minute();
    match cycle {
        HourCycle::H23 => format!("{hour:02}:{minute:02}"),
        HourCycle::H12 => {
            let period = if hour < 12 { "AM" } else { "PM" };
            let display = match hour % 12 {
                0 => 12,
                h => h,
            };
            format!("{display:02}:{minute:02} {period}")
        }
    }
}
