use super::*;

#[test]
fn resolve_without_props_uses_defaults() {
    let style = BorderStyleConfig::resolve(None, None, None);
    assert_eq!(style, BorderStyleConfig::default());
    assert!((style.width_px - 1.0).abs() < f64::EPSILON);
    assert_eq!(style.corner_radius, "0.75rem");
    assert_eq!(style.gradient, DEFAULT_GRADIENT);
}

#[test]
fn default_styles_render_expected_css() {
    let style = BorderStyleConfig::default();
    assert_eq!(
        style.outer_style(),
        format!("padding: 1px; border-radius: 0.75rem; background: {DEFAULT_GRADIENT};")
    );
    assert_eq!(style.inner_style(), "border-radius: calc(0.75rem - 1px);");
}

#[test]
fn explicit_width_and_radius_preserve_calc_expression() {
    let style = BorderStyleConfig::resolve(Some(4.0), Some("1rem".to_owned()), None);
    assert_eq!(style.inner_radius(), "calc(1rem - 4px)");
    assert!(style.outer_style().starts_with("padding: 4px; border-radius: 1rem;"));
}

#[test]
fn fractional_width_is_printed_verbatim() {
    let style = BorderStyleConfig::resolve(Some(1.5), None, None);
    assert_eq!(style.inner_radius(), "calc(0.75rem - 1.5px)");
}

#[test]
fn custom_gradient_is_passed_through() {
    let style = BorderStyleConfig::resolve(None, None, Some("linear-gradient(red, blue)".to_owned()));
    assert!(style.outer_style().ends_with("background: linear-gradient(red, blue);"));
}

#[test]
fn invalid_widths_fall_back_to_default() {
    for width in [-2.0, f64::NAN, f64::INFINITY] {
        let style = BorderStyleConfig::resolve(Some(width), None, None);
        assert!((style.width_px - DEFAULT_BORDER_WIDTH).abs() < f64::EPSILON);
    }
}

#[test]
fn zero_width_is_allowed() {
    let style = BorderStyleConfig::resolve(Some(0.0), None, None);
    assert_eq!(style.inner_radius(), "calc(0.75rem - 0px)");
}

#[test]
fn outer_class_appends_caller_classes() {
    assert_eq!(outer_class(""), "gradient-border");
    assert_eq!(outer_class("  "), "gradient-border");
    assert_eq!(outer_class("chat-card"), "gradient-border chat-card");
}
