use hitboxkit_designer::{serialize_hitbox, HitboxLabel, LogicalPoint};

#[test]
fn test_two_point_export() {
    let text = serialize_hitbox(
        &[LogicalPoint::new(1.0, 2.0), LogicalPoint::new(3.0, 4.0)],
        &HitboxLabel::new("foo"),
    );
    assert_eq!(
        text,
        "// foo shape\nfoo: [\n  { x: 1, y: 2 },\n  { x: 3, y: 4 }\n],"
    );
}

#[test]
fn test_values_are_not_rerounded() {
    let text = serialize_hitbox(&[LogicalPoint::new(0.1, -39.99)], &HitboxLabel::new("a"));
    assert!(text.contains("{ x: 0.1, y: -39.99 }"));
}

#[test]
fn test_empty_export_is_still_a_block() {
    let text = serialize_hitbox(&[], &HitboxLabel::new("empty"));
    assert!(text.starts_with("// empty shape\nempty: ["));
    assert!(text.ends_with("],"));
    assert!(!text.contains("x:"));
}

#[test]
fn test_label_is_used_verbatim() {
    let text = serialize_hitbox(&[], &HitboxLabel::new("big boss"));
    assert!(text.starts_with("// big boss shape\nbig boss: ["));
}
