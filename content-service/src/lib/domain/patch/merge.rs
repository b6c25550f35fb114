use chrono::DateTime;
use chrono::Utc;

use crate::domain::patch::errors::PatchError;
use crate::domain::patch::fields::FieldSpec;
use crate::domain::patch::fields::FieldValue;
use crate::domain::patch::value::PatchMap;

/// An entity that accepts partial updates.
///
/// `FIELDS` is the whitelist: only names listed there are read from a patch
/// map, so identifiers, parent references and creation timestamps stay out of
/// reach simply by not being listed.
pub trait Patchable: Clone {
    const FIELDS: &'static [FieldSpec];

    /// Write one already-checked value into its field.
    ///
    /// # Errors
    /// * `Unsupported` - `field` is listed in `FIELDS` but not handled here
    fn apply(&mut self, field: &'static str, value: FieldValue) -> Result<(), PatchError>;

    /// Record the modification time.
    fn touch(&mut self, at: DateTime<Utc>);
}

/// Merge `patch` into a copy of `entity`, stamped with the current time.
///
/// # Errors
/// Returns the first `PatchError` in field-table order. The original entity
/// is never modified.
pub fn merge<T>(entity: &T, patch: &PatchMap) -> Result<T, PatchError>
where
    T: Patchable,
{
    merge_at(entity, patch, Utc::now())
}

/// Merge `patch` into a copy of `entity`, stamping `updated_at` with `now`.
///
/// All listed fields are checked before any is applied, so a patch is
/// either applied completely or not at all.
pub fn merge_at<T>(entity: &T, patch: &PatchMap, now: DateTime<Utc>) -> Result<T, PatchError>
where
    T: Patchable,
{
    let checked = T::FIELDS
        .iter()
        .filter_map(|spec| {
            patch
                .get(spec.name)
                .map(|value| spec.kind.check(spec.name, value).map(|v| (spec.name, v)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut merged = entity.clone();
    for (field, value) in checked {
        merged.apply(field, value)?;
    }
    merged.touch(now);

    Ok(merged)
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;
    use crate::domain::patch::fields::FieldKind;
    use crate::domain::patch::value::PatchValue;

    #[derive(Debug, Clone, PartialEq)]
    struct Card {
        id: String,
        front: String,
        rank: i32,
        note: Option<String>,
        colour: String,
        updated_at: DateTime<Utc>,
    }

    impl Patchable for Card {
        const FIELDS: &'static [FieldSpec] = &[
            FieldSpec::new("front", FieldKind::RequiredText),
            FieldSpec::new("rank", FieldKind::Integer),
            FieldSpec::new("note", FieldKind::NullableText),
            FieldSpec::new("colour", FieldKind::OneOf(&["red", "blue"])),
        ];

        fn apply(&mut self, field: &'static str, value: FieldValue) -> Result<(), PatchError> {
            match (field, value) {
                ("front", FieldValue::Text(v)) => self.front = v,
                ("rank", FieldValue::Integer(v)) => self.rank = v,
                ("note", FieldValue::NullableText(v)) => self.note = v,
                ("colour", FieldValue::Text(v)) => self.colour = v,
                (field, _) => return Err(PatchError::Unsupported { field }),
            }
            Ok(())
        }

        fn touch(&mut self, at: DateTime<Utc>) {
            self.updated_at = at;
        }
    }

    fn card() -> Card {
        Card {
            id: "card-1".to_string(),
            front: "hola".to_string(),
            rank: 1,
            note: Some("greeting".to_string()),
            colour: "red".to_string(),
            updated_at: Utc::now() - Duration::days(1),
        }
    }

    #[test]
    fn test_merge_applies_listed_fields_and_ignores_the_rest() {
        let original = card();
        let now = Utc::now();
        let patch = PatchMap::new()
            .with("front", "adios")
            .with("rank", 4)
            .with("note", PatchValue::Null)
            .with("id", "attacker-id")
            .with("unknown", true);

        let merged = merge_at(&original, &patch, now).unwrap();

        assert_eq!(merged.id, "card-1");
        assert_eq!(merged.front, "adios");
        assert_eq!(merged.rank, 4);
        assert_eq!(merged.note, None);
        assert_eq!(merged.colour, "red");
        assert_eq!(merged.updated_at, now);
    }

    #[test]
    fn test_merge_is_all_or_nothing() {
        let original = card();
        let patch = PatchMap::new()
            .with("front", "adios")
            .with("colour", "green");

        let result = merge(&original, &patch);

        assert!(matches!(
            result,
            Err(PatchError::OutOfDomain { field: "colour", .. })
        ));
        assert_eq!(original.front, "hola");
        assert_eq!(original.colour, "red");
    }

    #[test]
    fn test_merge_type_mismatch_on_known_field() {
        let patch = PatchMap::new().with("rank", "4");
        assert_eq!(
            merge(&card(), &patch),
            Err(PatchError::TypeMismatch {
                field: "rank",
                expected: "an integer"
            })
        );
    }

    #[test]
    fn test_merge_reports_first_error_in_table_order() {
        let patch = PatchMap::new()
            .with("colour", "green")
            .with("front", "");
        assert_eq!(
            merge(&card(), &patch),
            Err(PatchError::Empty { field: "front" })
        );
    }

    #[test]
    fn test_empty_patch_only_touches() {
        let original = card();
        let now = Utc::now();
        let merged = merge_at(&original, &PatchMap::new(), now).unwrap();

        assert_eq!(
            merged,
            Card {
                updated_at: now,
                ..original
            }
        );
    }
}
