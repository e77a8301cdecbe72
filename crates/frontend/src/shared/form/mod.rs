//! Schema-driven create/edit form shown in a modal.

pub mod field;
pub mod modal;
pub mod schema;
pub mod session;

pub use field::FormField;
pub use crate::shared::modal_frame::ModalSize;
pub use modal::FormModal;
pub use schema::{
    server_field_errors, validate_schema, FieldDescriptor, FieldErrors, FieldType, SchemaError,
    SelectOption,
};
pub use session::{OpenToken, OpenTracker};
