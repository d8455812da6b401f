//! Repository records returned by the GitHub listing endpoints.
//!
//! Records are kept as the raw JSON objects GitHub returns so that callers
//! receive every field the API sent, not just the handful the filter reads.
//! Field reads follow JSON truthiness: a missing field, `null`, `false`, `0`
//! and `""` all count as unset.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Repository object exactly as returned by GitHub.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RepositoryRecord(Map<String, Value>);

impl RepositoryRecord {
    /// Wraps a raw JSON object.
    #[must_use]
    pub const fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Builds a record from any JSON value, treating non-objects as empty.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self(fields),
            _ => Self::default(),
        }
    }

    /// Borrows the underlying JSON fields.
    #[must_use]
    pub const fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Repository name, when present.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    /// `owner/name` identifier, when present.
    #[must_use]
    pub fn full_name(&self) -> Option<&str> {
        self.0.get("full_name").and_then(Value::as_str)
    }

    /// Whether the repository is private.
    #[must_use]
    pub fn is_private(&self) -> bool {
        self.flag("private")
    }

    /// Whether the repository is a fork.
    #[must_use]
    pub fn is_fork(&self) -> bool {
        self.flag("fork")
    }

    /// Whether the repository is archived.
    #[must_use]
    pub fn is_archived(&self) -> bool {
        self.flag("archived")
    }

    /// Whether the repository is a template.
    ///
    /// GitHub only includes `is_template` when the `baptiste` preview media
    /// type was requested.
    #[must_use]
    pub fn is_template(&self) -> bool {
        self.flag("is_template")
    }

    /// Permission grants for the calling credentials.
    ///
    /// GitHub omits `permissions` on unauthenticated requests, so `None`
    /// means the caller's access is unknown.
    #[must_use]
    pub fn permissions(&self) -> Option<Permissions<'_>> {
        self.0
            .get("permissions")
            .filter(|value| is_truthy(value))
            .map(Permissions)
    }

    fn flag(&self, key: &str) -> bool {
        self.0.get(key).is_some_and(is_truthy)
    }
}

impl From<Map<String, Value>> for RepositoryRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self::new(fields)
    }
}

/// Borrowed view of a repository's `permissions` object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Permissions<'record>(&'record Value);

impl Permissions<'_> {
    /// Returns true when the named permission key is present and truthy.
    ///
    /// Keys GitHub does not send (including unknown access levels) are
    /// reported as not granted.
    #[must_use]
    pub fn grants(&self, level: &str) -> bool {
        self.0.get(level).is_some_and(is_truthy)
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n.abs() > 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::{Value, json};

    use super::RepositoryRecord;

    fn record(value: Value) -> RepositoryRecord {
        RepositoryRecord::from_value(value)
    }

    #[rstest]
    #[case::absent(json!({}), false)]
    #[case::null(json!({"private": null}), false)]
    #[case::false_flag(json!({"private": false}), false)]
    #[case::true_flag(json!({"private": true}), true)]
    #[case::zero(json!({"private": 0}), false)]
    #[case::one(json!({"private": 1}), true)]
    #[case::empty_string(json!({"private": ""}), false)]
    #[case::string(json!({"private": "yes"}), true)]
    fn flags_follow_json_truthiness(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(record(value).is_private(), expected);
    }

    #[rstest]
    fn permissions_are_absent_when_missing_or_null() {
        assert!(record(json!({})).permissions().is_none());
        assert!(record(json!({"permissions": null})).permissions().is_none());
    }

    #[rstest]
    fn permissions_report_granted_levels() {
        let repo = record(json!({
            "permissions": { "pull": true, "push": false, "admin": false }
        }));
        let permissions = repo.permissions().expect("permissions should be present");

        assert!(permissions.grants("pull"));
        assert!(!permissions.grants("push"));
        assert!(!permissions.grants("admin"));
        assert!(!permissions.grants("maintain"), "unknown keys are not granted");
    }

    #[rstest]
    fn serializes_back_to_the_original_object() {
        let original = json!({
            "name": "demo",
            "full_name": "octo/demo",
            "private": false,
            "custom_properties": { "team": "core" }
        });
        let repo: RepositoryRecord =
            serde_json::from_value(original.clone()).expect("record should deserialize");

        assert_eq!(repo.name(), Some("demo"));
        assert_eq!(repo.full_name(), Some("octo/demo"));
        assert_eq!(
            serde_json::to_value(&repo).expect("record should serialize"),
            original
        );
    }

    #[rstest]
    fn non_object_values_become_empty_records() {
        let repo = record(json!([1, 2, 3]));
        assert!(repo.fields().is_empty());
    }
}
