//! Declarative field validation.
//!
//! DESIGN
//! ======
//! A schema is a static table of `field -> [rule]`. Each rule is a plain
//! predicate plus the message shown when it fails. Every field is checked on
//! every pass; within a field the first failing rule wins. Forms describe
//! their constraints as data and get one error map back.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::collections::BTreeMap;

/// One predicate over the whole input `T`, with validation context `C`.
pub struct Rule<T: 'static, C: 'static> {
    pub check: fn(&T, &C) -> bool,
    pub message: &'static str,
}

/// All rules that gate one field.
pub struct FieldSchema<F: 'static, T: 'static, C: 'static> {
    pub field: F,
    pub rules: &'static [Rule<T, C>],
}

/// Run every field's rules and collect the first failure per field.
///
/// An empty map means the input is valid.
pub fn validate<F, T, C>(schema: &[FieldSchema<F, T, C>], input: &T, ctx: &C) -> BTreeMap<F, &'static str>
where
    F: Ord + Copy,
{
    schema
        .iter()
        .filter_map(|entry| {
            entry
                .rules
                .iter()
                .find(|rule| !(rule.check)(input, ctx))
                .map(|rule| (entry.field, rule.message))
        })
        .collect()
}

/// `true` when `value` has at least `min` characters after trimming.
#[must_use]
pub fn has_min_chars(value: &str, min: usize) -> bool {
    value.trim().chars().count() >= min
}

/// Loose structural email check: `local@domain.tld`, no whitespace, no empty
/// dot-separated domain labels.
#[must_use]
pub fn is_email_shaped(value: &str) -> bool {
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}
