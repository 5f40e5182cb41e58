//! Decorative gradient ring around arbitrary content.
//!
//! DESIGN
//! ======
//! The outer box is painted with the gradient and padded by the border
//! width. The inner box fills the padding box with a surface background and a
//! `calc(radius - width)` corner, leaving only the gradient ring visible.

#[cfg(test)]
#[path = "gradient_border_test.rs"]
mod gradient_border_test;

use leptos::prelude::*;

pub const DEFAULT_BORDER_WIDTH: f64 = 1.0;
pub const DEFAULT_BORDER_RADIUS: &str = "0.75rem";
pub const DEFAULT_GRADIENT: &str = "linear-gradient(135deg, #6366f1 0%, #a855f7 50%, #ec4899 100%)";

/// Resolved border styling for one render.
#[derive(Clone, Debug, PartialEq)]
pub struct BorderStyleConfig {
    pub width_px: f64,
    pub corner_radius: String,
    pub gradient: String,
}

impl Default for BorderStyleConfig {
    fn default() -> Self {
        Self {
            width_px: DEFAULT_BORDER_WIDTH,
            corner_radius: DEFAULT_BORDER_RADIUS.to_owned(),
            gradient: DEFAULT_GRADIENT.to_owned(),
        }
    }
}

impl BorderStyleConfig {
    /// Fill missing values with defaults. Non-finite or negative widths fall
    /// back to the default width.
    pub fn resolve(width: Option<f64>, radius: Option<String>, gradient: Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            width_px: width.filter(|w| w.is_finite() && *w >= 0.0).unwrap_or(defaults.width_px),
            corner_radius: radius.unwrap_or(defaults.corner_radius),
            gradient: gradient.unwrap_or(defaults.gradient),
        }
    }

    pub fn inner_radius(&self) -> String {
        format!("calc({} - {}px)", self.corner_radius, self.width_px)
    }

    pub fn outer_style(&self) -> String {
        format!(
            "padding: {}px; border-radius: {}; background: {};",
            self.width_px, self.corner_radius, self.gradient
        )
    }

    pub fn inner_style(&self) -> String {
        format!("border-radius: {};", self.inner_radius())
    }
}

/// Wrap `children` in a gradient-bordered container.
#[component]
pub fn GradientBorder(
    children: Children,
    #[prop(optional, into)] class: String,
    #[prop(optional)] border_width: Option<f64>,
    #[prop(optional, into)] border_radius: Option<String>,
    #[prop(optional, into)] gradient: Option<String>,
) -> impl IntoView {
    let style = BorderStyleConfig::resolve(border_width, border_radius, gradient);
    let outer_class = outer_class(&class);

    view! {
        <div class=outer_class style=style.outer_style()>
            <div class="gradient-border__inner" style=style.inner_style()>
                {children()}
            </div>
        </div>
    }
}

fn outer_class(extra: &str) -> String {
    let extra = extra.trim();
    if extra.is_empty() {
        "gradient-border".to_owned()
    } else {
        format!("gradient-border {extra}")
    }
}
