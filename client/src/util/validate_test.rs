use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Field {
    Title,
    Count,
}

struct Input {
    title: String,
    count: u32,
}

static SCHEMA: &[FieldSchema<Field, Input, u32>] = &[
    FieldSchema {
        field: Field::Title,
        rules: &[
            Rule { check: |i, _| !i.title.trim().is_empty(), message: "required" },
            Rule { check: |i, _| has_min_chars(&i.title, 3), message: "too short" },
        ],
    },
    FieldSchema { field: Field::Count, rules: &[Rule { check: |i, max| i.count <= *max, message: "too many" }] },
];

// =============================================================
// validate
// =============================================================

#[test]
fn validate_returns_empty_map_for_valid_input() {
    let input = Input { title: "Koi fish".to_owned(), count: 2 };
    assert!(validate(SCHEMA, &input, &5).is_empty());
}

#[test]
fn validate_reports_first_failing_rule_per_field() {
    let input = Input { title: "  ".to_owned(), count: 2 };
    let errors = validate(SCHEMA, &input, &5);
    assert_eq!(errors.get(&Field::Title), Some(&"required"));
    assert_eq!(errors.len(), 1);
}

#[test]
fn validate_checks_every_field() {
    let input = Input { title: "ab".to_owned(), count: 9 };
    let errors = validate(SCHEMA, &input, &5);
    assert_eq!(errors.get(&Field::Title), Some(&"too short"));
    assert_eq!(errors.get(&Field::Count), Some(&"too many"));
}

#[test]
fn validate_passes_context_to_rules() {
    let input = Input { title: "Rose".to_owned(), count: 9 };
    assert!(validate(SCHEMA, &input, &10).is_empty());
}

// =============================================================
// has_min_chars
// =============================================================

#[test]
fn has_min_chars_counts_trimmed_characters() {
    assert!(has_min_chars("Al", 2));
    assert!(!has_min_chars(" A ", 2));
    assert!(has_min_chars("Zoë", 3));
}

// =============================================================
// is_email_shaped
// =============================================================

#[test]
fn is_email_shaped_accepts_common_addresses() {
    assert!(is_email_shaped("info@inkovermatter.com"));
    assert!(is_email_shaped("first.last+ink@mail.example.co"));
    assert!(is_email_shaped("  padded@example.com  "));
}

#[test]
fn is_email_shaped_rejects_malformed_addresses() {
    for bad in ["", "plain", "@example.com", "user@", "user@localhost", "user@@example.com", "a b@example.com", "user@example..com", "user@.com"] {
        assert!(!is_email_shaped(bad), "{bad} should be rejected");
    }
}
