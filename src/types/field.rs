use crate::types::FieldValue;
use internment::Intern;
use serde::{Deserialize, Serialize};

/// A named scalar value attached to a log record.
///
/// Field names carry no uniqueness constraint within a record: duplicates are
/// legal and preserved in order.
#[derive(Clone, PartialEq, PartialOrd, Hash, Debug, Serialize, Deserialize)]
pub struct Field {
    pub name: Intern<String>,
    pub value: FieldValue,
}

impl Field {
    pub fn new(name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self {
            name: Intern::new(name.into()),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn construction_is_infallible() {
        let f = Field::new("GyroAngle", 22.2);
        assert_eq!(f.name.as_str(), "GyroAngle");
        assert_eq!(f.value, FieldValue::from(22.2));

        // Empty names and empty string values are accepted as-is
        let f = Field::new("", "");
        assert_eq!(f.name.as_str(), "");
        assert_eq!(f.value, FieldValue::from(""));
    }

    #[test]
    fn serializes_as_name_value_object() {
        let f = Field::new("Team", 2175);
        assert_eq!(
            serde_json::to_string(&f).unwrap(),
            r#"{"name":"Team","value":2175}"#
        );
    }

    #[test]
    fn deserializes_scalar_variants() {
        let f: Field = serde_json::from_str(r#"{"name":"enabled","value":true}"#).unwrap();
        assert_eq!(f, Field::new("enabled", true));

        let f: Field = serde_json::from_str(r#"{"name":"Output","value":0.84}"#).unwrap();
        assert_eq!(f, Field::new("Output", 0.84));
    }
}
