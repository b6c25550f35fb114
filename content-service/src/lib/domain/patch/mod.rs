//! Partial updates from loosely typed field maps.
//!
//! A request body such as `{"status": "published", "id": "x"}` is read into a
//! [`PatchMap`] of [`PatchValue`]s. Each patchable entity declares a static
//! table of its mutable fields and their [`FieldKind`]; [`merge`] checks the
//! map against that table and either returns a fully updated copy of the
//! entity or an error, leaving the original untouched.
//!
//! Keys that are not in the table (identifiers, foreign keys, timestamps,
//! typos) are ignored. Keys that are in the table but carry a value of the
//! wrong shape are rejected.

pub mod errors;
pub mod fields;
pub mod merge;
pub mod value;

pub use errors::PatchError;
pub use fields::FieldKind;
pub use fields::FieldSpec;
pub use fields::FieldValue;
pub use merge::merge;
pub use merge::merge_at;
pub use merge::Patchable;
pub use value::PatchMap;
pub use value::PatchValue;
