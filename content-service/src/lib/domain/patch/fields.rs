use crate::domain::patch::errors::PatchError;
use crate::domain::patch::value::PatchValue;

/// Accepted shape of a mutable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Any string, including empty.
    Text,
    /// A string with at least one non-whitespace character.
    RequiredText,
    /// A JSON integer that fits in 32 bits. Fractions are rejected.
    Integer,
    /// A string, or `null` to clear the field.
    NullableText,
    /// A string from a closed set.
    OneOf(&'static [&'static str]),
}

/// One row of an entity's field table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }
}

/// A patch value that passed its field's check, ready to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Integer(i32),
    NullableText(Option<String>),
}

impl FieldKind {
    /// Check `value` against this kind.
    ///
    /// # Errors
    /// * `TypeMismatch` - Value has the wrong JSON shape
    /// * `Empty` - Required text is blank
    /// * `OutOfDomain` - Enumerated value outside its set
    pub fn check(&self, field: &'static str, value: &PatchValue) -> Result<FieldValue, PatchError> {
        match (self, value) {
            (FieldKind::Text, PatchValue::String(s)) => Ok(FieldValue::Text(s.clone())),
            (FieldKind::Text, _) => Err(mismatch(field, "a string")),

            (FieldKind::RequiredText, PatchValue::String(s)) if s.trim().is_empty() => {
                Err(PatchError::Empty { field })
            }
            (FieldKind::RequiredText, PatchValue::String(s)) => Ok(FieldValue::Text(s.clone())),
            (FieldKind::RequiredText, _) => Err(mismatch(field, "a string")),

            (FieldKind::Integer, PatchValue::Number(n)) => n
                .as_i64()
                .and_then(|i| i32::try_from(i).ok())
                .map(FieldValue::Integer)
                .ok_or_else(|| mismatch(field, "an integer")),
            (FieldKind::Integer, _) => Err(mismatch(field, "an integer")),

            (FieldKind::NullableText, PatchValue::Null) => Ok(FieldValue::NullableText(None)),
            (FieldKind::NullableText, PatchValue::String(s)) => {
                Ok(FieldValue::NullableText(Some(s.clone())))
            }
            (FieldKind::NullableText, _) => Err(mismatch(field, "a string or null")),

            (FieldKind::OneOf(allowed), PatchValue::String(s)) => {
                if allowed.contains(&s.as_str()) {
                    Ok(FieldValue::Text(s.clone()))
                } else {
                    Err(PatchError::OutOfDomain {
                        field,
                        value: s.clone(),
                        allowed: *allowed,
                    })
                }
            }
            (FieldKind::OneOf(_), _) => Err(mismatch(field, "a string")),
        }
    }
}

fn mismatch(field: &'static str, expected: &'static str) -> PatchError {
    PatchError::TypeMismatch { field, expected }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn value(json: serde_json::Value) -> PatchValue {
        PatchValue::from(json)
    }

    #[test]
    fn test_text() {
        assert_eq!(
            FieldKind::Text.check("description", &value(json!(""))),
            Ok(FieldValue::Text(String::new()))
        );
        assert_eq!(
            FieldKind::Text.check("description", &value(json!(5))),
            Err(PatchError::TypeMismatch {
                field: "description",
                expected: "a string"
            })
        );
        assert!(FieldKind::Text.check("description", &value(json!(null))).is_err());
    }

    #[test]
    fn test_required_text_rejects_blank() {
        assert_eq!(
            FieldKind::RequiredText.check("title", &value(json!("  "))),
            Err(PatchError::Empty { field: "title" })
        );
        assert_eq!(
            FieldKind::RequiredText.check("title", &value(json!("Greetings"))),
            Ok(FieldValue::Text("Greetings".to_string()))
        );
    }

    #[test]
    fn test_integer_is_strict() {
        assert_eq!(
            FieldKind::Integer.check("displayOrder", &value(json!(3))),
            Ok(FieldValue::Integer(3))
        );
        assert_eq!(
            FieldKind::Integer.check("displayOrder", &value(json!(-1))),
            Ok(FieldValue::Integer(-1))
        );
        for rejected in [json!(2.5), json!("3"), json!(true), json!(null), json!(4_294_967_296i64)] {
            assert!(
                FieldKind::Integer.check("displayOrder", &value(rejected.clone())).is_err(),
                "{} should be rejected",
                rejected
            );
        }
    }

    #[test]
    fn test_nullable_text() {
        assert_eq!(
            FieldKind::NullableText.check("imageUrl", &value(json!(null))),
            Ok(FieldValue::NullableText(None))
        );
        assert_eq!(
            FieldKind::NullableText.check("imageUrl", &value(json!("/img.png"))),
            Ok(FieldValue::NullableText(Some("/img.png".to_string())))
        );
        assert!(FieldKind::NullableText.check("imageUrl", &value(json!(["x"]))).is_err());
    }

    #[test]
    fn test_one_of_closed_domain() {
        const STATES: &[&str] = &["draft", "published"];
        let kind = FieldKind::OneOf(STATES);

        assert_eq!(
            kind.check("status", &value(json!("published"))),
            Ok(FieldValue::Text("published".to_string()))
        );

        let err = kind.check("status", &value(json!("bogus"))).unwrap_err();
        assert_eq!(
            err,
            PatchError::OutOfDomain {
                field: "status",
                value: "bogus".to_string(),
                allowed: STATES,
            }
        );
        assert_eq!(
            err.to_string(),
            "invalid status: bogus (expected one of draft, published)"
        );

        assert!(kind.check("status", &value(json!("Draft"))).is_err());
        assert!(kind.check("status", &value(json!(1))).is_err());
    }
}
