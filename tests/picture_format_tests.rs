use compfmt::{format_number, Culture};

fn en() -> std::sync::Arc<Culture> {
    Culture::lookup("en-US")
}

fn sv() -> std::sync::Arc<Culture> {
    Culture::lookup("sv")
}

#[test]
fn test_forced_and_optional_digits() {
    assert_eq!(format_number(42.0, Some("00000"), &en()), "00042");
    assert_eq!(format_number(42.0, Some("#####"), &en()), "42");
    assert_eq!(format_number(0.5, Some("0.00"), &en()), "0.50");
    // The rounded string's leading zero flows through the placeholder.
    assert_eq!(format_number(0.5, Some("#.##"), &en()), "0.5");
}

#[test]
fn test_optional_decimals_trim() {
    assert_eq!(format_number(3.14159, Some("0.##"), &en()), "3.14");
    assert_eq!(format_number(3.0, Some("0.##"), &en()), "3");
    assert_eq!(format_number(3.1, Some("0.0#"), &en()), "3.1");
}

#[test]
fn test_grouping_window() {
    assert_eq!(format_number(1000.0, Some("#,##0.00"), &en()), "1,000.00");
    assert_eq!(format_number(1234567.0, Some("#,0"), &en()), "1,234,567");
    // Grouping only engages on a placeholder-comma-placeholder window.
    assert_eq!(format_number(1234567.0, Some("0"), &en()), "1234567");
    assert_eq!(format_number(1000.0, Some("#,##0.00"), &sv()), "1 000,00");
}

#[test]
fn test_extra_digits_flow_into_first_placeholder() {
    // More integral digits than placeholders: the first placeholder
    // carries the overflow.
    assert_eq!(format_number(12345.0, Some("0"), &en()), "12345");
    assert_eq!(format_number(12345.0, Some("00"), &en()), "12345");
}

#[test]
fn test_percent_scaling() {
    assert_eq!(format_number(0.25, Some("0.0%"), &en()), "25.0%");
    // Scale detection scans the whole picture, quoted parts included.
    assert_eq!(format_number(0.25, Some("0 '%'"), &en()), "25 %");
}

#[test]
fn test_thousand_scaling() {
    assert_eq!(format_number(12345.0, Some("0,.0"), &en()), "12.3");
    assert_eq!(format_number(12345678.0, Some("#,0,."), &en()), "12,346");
}

#[test]
fn test_sections() {
    assert_eq!(format_number(5.0, Some("0;(0)"), &en()), "5");
    assert_eq!(format_number(-5.0, Some("0;(0)"), &en()), "(5)");
    assert_eq!(format_number(0.0, Some("0;(0);zero"), &en()), "zero");
    // A single section renders the sign itself.
    assert_eq!(format_number(-5.0, Some("0"), &en()), "-5");
    // With only two sections, zero uses the positive section.
    assert_eq!(format_number(0.0, Some("0.0;(0.0)"), &en()), "0.0");
}

#[test]
fn test_quoted_literals() {
    assert_eq!(format_number(5.0, Some("0' kr'"), &en()), "5 kr");
    // Placeholders inside quotes are inert.
    assert_eq!(format_number(5.0, Some("0 'of 0'"), &en()), "5 of 0");
}

#[test]
fn test_literal_passthrough() {
    assert_eq!(format_number(7.0, Some("~0~"), &en()), "~7~");
    // Commas outside a grouping window are swallowed.
    assert_eq!(format_number(7.0, Some("0,"), &en()), "7");
}

#[test]
fn test_rounding_to_picture_decimals() {
    assert_eq!(format_number(0.146, Some("0.00"), &en()), "0.15");
    assert_eq!(format_number(0.999, Some("0.0"), &en()), "1.0");
}
