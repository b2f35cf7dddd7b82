use std::collections::HashMap;

use crate::domain::common::entities::app_errors::CoreError;

/// Raw value of a single query field as the transport layer hands it over.
/// Repeated keys arrive as `Multiple`; the transport guarantees the shape
/// per key but not the cardinality.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RawValue {
    #[default]
    Absent,
    Single(String),
    Multiple(Vec<String>),
}

/// Bag of raw query parameters, keyed by field name. Every field is
/// independently optional.
#[derive(Debug, Clone, Default)]
pub struct RawParams(HashMap<String, RawValue>);

impl RawParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from decoded query pairs, folding repeated keys into
    /// `Multiple`.
    pub fn from_pairs<P>(pairs: P) -> Self
    where
        P: IntoIterator<Item = (String, String)>,
    {
        let mut params = Self::new();
        for (key, value) in pairs {
            let slot = params.0.entry(key).or_default();
            *slot = match std::mem::take(slot) {
                RawValue::Absent => RawValue::Single(value),
                RawValue::Single(first) => RawValue::Multiple(vec![first, value]),
                RawValue::Multiple(mut values) => {
                    values.push(value);
                    RawValue::Multiple(values)
                }
            };
        }
        params
    }

    pub fn insert(&mut self, field: impl Into<String>, value: RawValue) {
        self.0.insert(field.into(), value);
    }

    pub fn get(&self, field: &str) -> &RawValue {
        static ABSENT: RawValue = RawValue::Absent;
        self.0.get(field).unwrap_or(&ABSENT)
    }

    /// Extract the single value of a field. A field the client supplied
    /// more than once is ambiguous and rejected rather than silently
    /// picking one of the values.
    pub fn single(&self, field: &str) -> Result<Option<&str>, CoreError> {
        match self.get(field) {
            RawValue::Absent => Ok(None),
            RawValue::Single(value) => Ok(Some(value.as_str())),
            RawValue::Multiple(values) => match values.as_slice() {
                [] => Ok(None),
                [value] => Ok(Some(value.as_str())),
                _ => Err(CoreError::InvalidParameterShape(field.to_string())),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> RawParams {
        RawParams::from_pairs(
            items
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string())),
        )
    }

    #[test]
    fn absent_field_extracts_to_none() {
        let params = RawParams::new();
        assert_eq!(params.single("status").unwrap(), None);
    }

    #[test]
    fn single_value_extracts() {
        let params = pairs(&[("status", "shipped")]);
        assert_eq!(params.single("status").unwrap(), Some("shipped"));
    }

    #[test]
    fn repeated_key_folds_into_multiple() {
        let params = pairs(&[("status", "a"), ("status", "b")]);
        assert_eq!(
            *params.get("status"),
            RawValue::Multiple(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn multiple_with_two_values_is_rejected() {
        let params = pairs(&[("status", "a"), ("status", "b")]);
        assert_eq!(
            params.single("status"),
            Err(CoreError::InvalidParameterShape("status".to_string()))
        );
    }

    #[test]
    fn multiple_with_one_value_extracts() {
        let mut params = RawParams::new();
        params.insert("status", RawValue::Multiple(vec!["a".to_string()]));
        assert_eq!(params.single("status").unwrap(), Some("a"));
    }

    #[test]
    fn empty_multiple_extracts_to_none() {
        let mut params = RawParams::new();
        params.insert("status", RawValue::Multiple(Vec::new()));
        assert_eq!(params.single("status").unwrap(), None);
    }
}
