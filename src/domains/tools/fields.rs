//! Field picking for tool responses.
//!
//! Sentry payloads are large. Tools accept a comma-separated `fields`
//! argument naming the top-level keys to keep, and every response is run
//! through [`select`] (or [`select_owned`]) before it is returned.
//!
//! Filtering is lenient: requested keys that are absent from the source
//! object are skipped, never padded with `null`.

use serde_json::{Map, Value};

/// A parsed field specification: trimmed, non-empty key names in the
/// order they were given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec<'a> {
    keys: Vec<&'a str>,
}

impl<'a> FieldSpec<'a> {
    /// Parse a comma-separated field list.
    ///
    /// Returns `None` when the list contains no usable key, which callers
    /// treat as "no filtering".
    pub fn parse(spec: &'a str) -> Option<Self> {
        let keys: Vec<&str> = spec
            .split(',')
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .collect();

        if keys.is_empty() { None } else { Some(Self { keys }) }
    }

    /// The parsed key names.
    pub fn keys(&self) -> &[&'a str] {
        &self.keys
    }

    /// Whether `key` was requested.
    pub fn contains(&self, key: &str) -> bool {
        self.keys.iter().any(|k| *k == key)
    }
}

/// Copy of `item` holding only the entries whose key is listed in `keys`.
pub fn prune(item: &Map<String, Value>, keys: &[&str]) -> Map<String, Value> {
    item.iter()
        .filter(|(key, _)| keys.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Shape `data` down to the keys named in `fields`.
///
/// Objects are pruned, arrays are pruned element by element, anything else
/// is returned as-is. A missing or blank field list returns `data`
/// unchanged.
pub fn select(data: &Value, fields: Option<&str>) -> Value {
    let Some(spec) = fields.and_then(FieldSpec::parse) else {
        return data.clone();
    };

    match data {
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| match item {
                    Value::Object(map) => Value::Object(prune(map, spec.keys())),
                    other => other.clone(),
                })
                .collect(),
        ),
        Value::Object(map) => Value::Object(prune(map, spec.keys())),
        other => other.clone(),
    }
}

/// Owning variant of [`select`], used on decoded response bodies so large
/// payloads are filtered without being copied first.
pub fn select_owned(data: Value, fields: Option<&str>) -> Value {
    let Some(spec) = fields.and_then(FieldSpec::parse) else {
        return data;
    };

    match data {
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| prune_value(item, &spec))
                .collect(),
        ),
        other => prune_value(other, &spec),
    }
}

fn prune_value(value: Value, spec: &FieldSpec<'_>) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(key, _)| spec.contains(key))
                .collect(),
        ),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_parse_trims_and_drops_empty_tokens() {
        let spec = FieldSpec::parse(" id , ,title,").unwrap();
        assert_eq!(spec.keys(), &["id", "title"]);
    }

    #[test]
    fn test_parse_blank_spec_is_none() {
        assert!(FieldSpec::parse("").is_none());
        assert!(FieldSpec::parse("  ,  ").is_none());
        assert!(FieldSpec::parse(",,,").is_none());
    }

    #[test]
    fn test_select_object() {
        let data = json!({"id": "1", "title": "Err", "extra": "x"});
        assert_eq!(
            select(&data, Some("id,title")),
            json!({"id": "1", "title": "Err"})
        );
    }

    #[test]
    fn test_select_array() {
        let data = json!([{"a": 1, "b": 2}, {"a": 3, "b": 4}]);
        assert_eq!(select(&data, Some("a")), json!([{"a": 1}, {"a": 3}]));
    }

    #[test]
    fn test_select_skips_absent_keys() {
        let data = json!({"id": "1"});
        assert_eq!(select(&data, Some("id,missing")), json!({"id": "1"}));
    }

    #[test]
    fn test_select_without_fields_is_identity() {
        let data = json!({"id": "1", "nested": {"a": [1, 2]}});
        assert_eq!(select(&data, None), data);
        assert_eq!(select(&data, Some("")), data);
        assert_eq!(select(&data, Some("  ,  ")), data);
    }

    #[test]
    fn test_select_scalars_pass_through() {
        for value in [json!(null), json!(42), json!("text"), json!(true)] {
            assert_eq!(select(&value, Some("id")), value);
            assert_eq!(select_owned(value.clone(), Some("id")), value);
        }
    }

    #[test]
    fn test_select_array_keeps_non_object_items() {
        let data = json!([{"a": 1, "b": 2}, 7, null]);
        assert_eq!(select(&data, Some("a")), json!([{"a": 1}, 7, null]));
    }

    #[test]
    fn test_select_does_not_touch_input() {
        let data = json!({"id": "1", "title": "Err"});
        let before = data.clone();
        let _ = select(&data, Some("id"));
        assert_eq!(data, before);
    }

    #[test]
    fn test_select_owned_matches_select() {
        let data = json!([{"id": "1", "tags": [], "x": 0}, {"id": "2"}]);
        assert_eq!(
            select_owned(data.clone(), Some("id,tags")),
            select(&data, Some("id,tags"))
        );
    }

    #[test]
    fn test_prune_nested_values_are_kept_whole() {
        let item = json!({"status": {"id": "active", "name": "active"}, "slug": "acme"});
        let Value::Object(map) = item else { unreachable!() };
        let pruned = prune(&map, &["status"]);
        assert_eq!(
            Value::Object(pruned),
            json!({"status": {"id": "active", "name": "active"}})
        );
    }

    fn object_strategy() -> impl Strategy<Value = Map<String, Value>> {
        prop::collection::btree_map("[a-f]{1,2}", any::<i64>(), 0..8)
            .prop_map(|m| {
                m.into_iter()
                    .map(|(k, v)| (k, json!(v)))
                    .collect::<Map<String, Value>>()
            })
    }

    fn spec_strategy() -> impl Strategy<Value = String> {
        prop::collection::vec("[a-f]{1,2}| ", 0..6).prop_map(|keys| keys.join(","))
    }

    proptest! {
        #[test]
        fn prop_selected_keys_are_requested_and_present(
            object in object_strategy(),
            spec in spec_strategy(),
        ) {
            let shaped = select(&Value::Object(object.clone()), Some(&spec));
            let Value::Object(shaped) = shaped else { panic!("expected object") };
            match FieldSpec::parse(&spec) {
                Some(parsed) => {
                    for key in shaped.keys() {
                        prop_assert!(parsed.contains(key));
                        prop_assert!(object.contains_key(key));
                    }
                }
                None => prop_assert_eq!(shaped, object),
            }
        }

        #[test]
        fn prop_select_is_idempotent(object in object_strategy(), spec in spec_strategy()) {
            let data = Value::Object(object);
            let once = select(&data, Some(&spec));
            let twice = select(&once, Some(&spec));
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_array_select_is_elementwise(
            objects in prop::collection::vec(object_strategy(), 0..5),
            spec in spec_strategy(),
        ) {
            let items: Vec<Value> = objects.into_iter().map(Value::Object).collect();
            let shaped = select(&Value::Array(items.clone()), Some(&spec));
            let Value::Array(shaped) = shaped else { panic!("expected array") };
            prop_assert_eq!(shaped.len(), items.len());
            for (item, out) in items.iter().zip(&shaped) {
                prop_assert_eq!(&select(item, Some(&spec)), out);
            }
        }
    }
}
