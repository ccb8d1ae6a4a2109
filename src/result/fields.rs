//! Declarative accessor table.
//!
//! Every documented response field is listed once with the JSON kind it is read
//! as and the value returned when it is absent or has an unexpected type.

use crate::config::{DOES_NOT_EXIST, NA};

/// How a field is read and what it defaults to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Truthiness of any JSON value; absent reads as `false`.
    Bool,
    /// JSON string, with the default used when absent.
    Str(&'static str),
    /// JSON integer, with the default used when absent.
    Int(i64),
    /// Nested JSON object; absent reads as an empty mapping.
    Map,
    /// JSON array of strings; absent reads as an empty sequence.
    StrList,
}

/// A documented response field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

const fn field(name: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec { name, kind }
}

/// All documented fields of a normalized result.
pub const FIELDS: &[FieldSpec] = &[
    field("success", FieldKind::Bool),
    field("message", FieldKind::Str("")),
    field("status_code", FieldKind::Int(0)),
    field("unsafe", FieldKind::Bool),
    field("domain", FieldKind::Str("")),
    field("ip_address", FieldKind::Str("")),
    field("server", FieldKind::Str(NA)),
    field("content_type", FieldKind::Str(NA)),
    field("risk_score", FieldKind::Int(DOES_NOT_EXIST)),
    field("page_size", FieldKind::Int(0)),
    field("domain_rank", FieldKind::Int(DOES_NOT_EXIST)),
    field("dns_valid", FieldKind::Bool),
    field("suspicious", FieldKind::Bool),
    field("phishing", FieldKind::Bool),
    field("malware", FieldKind::Bool),
    field("parking", FieldKind::Bool),
    field("spamming", FieldKind::Bool),
    field("adult", FieldKind::Bool),
    field("category", FieldKind::Str(NA)),
    field("domain_age", FieldKind::Map),
    field("request_id", FieldKind::Str("")),
    field("errors", FieldKind::StrList),
];

/// Looks up the accessor rule for a field name.
pub fn spec(name: &str) -> Option<&'static FieldSpec> {
    FIELDS.iter().find(|f| f.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_field_names_are_unique() {
        let names: HashSet<&str> = FIELDS.iter().map(|f| f.name).collect();
        assert_eq!(names.len(), FIELDS.len());
    }

    #[test]
    fn test_sentinel_defaults() {
        assert_eq!(spec("risk_score").map(|f| f.kind), Some(FieldKind::Int(-999)));
        assert_eq!(spec("domain_rank").map(|f| f.kind), Some(FieldKind::Int(-999)));
        assert_eq!(spec("status_code").map(|f| f.kind), Some(FieldKind::Int(0)));
        assert_eq!(spec("page_size").map(|f| f.kind), Some(FieldKind::Int(0)));
        assert_eq!(spec("server").map(|f| f.kind), Some(FieldKind::Str("N/A")));
        assert_eq!(spec("content_type").map(|f| f.kind), Some(FieldKind::Str("N/A")));
        assert_eq!(spec("category").map(|f| f.kind), Some(FieldKind::Str("N/A")));
        assert_eq!(spec("domain").map(|f| f.kind), Some(FieldKind::Str("")));
    }

    #[test]
    fn test_unknown_field() {
        assert!(spec("not_a_field").is_none());
    }
}
