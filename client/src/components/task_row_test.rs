use super::*;

#[test]
fn row_transform_formats_pixels() {
    assert_eq!(row_transform(0.0), "translateX(0px)");
    assert_eq!(row_transform(-72.0), "translateX(-72px)");
    assert_eq!(row_transform(-40.5), "translateX(-40.5px)");
}

#[test]
fn priority_class_has_modifier_per_level() {
    assert!(priority_class(Priority::Low).ends_with("--low"));
    assert!(priority_class(Priority::Medium).ends_with("--medium"));
    assert!(priority_class(Priority::High).ends_with("--high"));
}

#[test]
fn notes_preview_takes_first_non_blank_line() {
    assert_eq!(notes_preview(""), None);
    assert_eq!(notes_preview("\n  \n"), None);
    assert_eq!(notes_preview("\n  call back \nsecond"), Some("call back"));
}
