pub mod field;
pub mod note;
pub mod product;

pub use crate::types::identifiers::{AuthorId, NoteId, RecordId};
pub use field::{CategoricalField, FieldValue, UnknownFieldError, UNSPECIFIED};
pub use note::Note;
pub use product::ProductRecord;
