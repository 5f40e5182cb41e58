use super::*;
use time::macros::datetime;

#[test]
fn format_clock_afternoon_in_both_cycles() {
    let ts = datetime!(2026-10-14 14:05 UTC);
    assert_eq!(format_clock(ts, HourCycle::H12), "02:05 PM");
    assert_eq!(format_clock(ts, HourCycle::H23), "14:05");
}

#[test]
fn format_clock_midnight_and_noon_edges() {
    let midnight = datetime!(2026-10-14 00:00 UTC);
    let noon = datetime!(2026-10-14 12:00 UTC);
    assert_eq!(format_clock(midnight, HourCycle::H12), "12:00 AM");
    assert_eq!(format_clock(midnight, HourCycle::H23), "00:00");
    assert_eq!(format_clock(noon, HourCycle::H12), "12:00 PM");
    assert_eq!(format_clock(noon, HourCycle::H23), "12:00");
}

#[test]
fn format_clock_reads_wall_clock_of_offset() {
    let ts = datetime!(2026-10-14 23:59 -5);
    assert_eq!(format_clock(ts, HourCycle::H23), "23:59");
    assert_eq!(format_clock(ts, HourCycle::H12), "11:59 PM");
}

#[test]
fn format_clock_is_stable_across_calls() {
    let ts = datetime!(2026-10-14 09:30 UTC);
    let first = format_clock(ts, HourCycle::H12);
    let second = format_clock(ts, HourCycle::H12);
    assert_eq!(first, second);
    assert_eq!(first, "09:30 AM");
}

#[test]
fn for_locale_maps_common_tags() {
    assert_eq!(HourCycle::for_locale("en-US"), HourCycle::H12);
    assert_eq!(HourCycle::for_locale("en_us"), HourCycle::H12);
    assert_eq!(HourCycle::for_locale("en"), HourCycle::H12);
    assert_eq!(HourCycle::for_locale("en-GB"), HourCycle::H23);
    assert_eq!(HourCycle::for_locale("de-DE"), HourCycle::H23);
    assert_eq!(HourCycle::for_locale("fr"), HourCycle::H23);
}

#[test]
fn for_locale_empty_uses_default() {
    assert_eq!(HourCycle::for_locale("  "), HourCycle::default());
}
