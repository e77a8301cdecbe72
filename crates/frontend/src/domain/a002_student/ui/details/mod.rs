//! Student details UI
//!
//! - model.rs: field schema and draft <-> payload mapping
//! - validation.rs: student field rules
//! - parents.rs: bounded parent/guardian editor embedded in the form
//! - view.rs: add/edit form modal and the read-only details dialog

mod model;
pub mod parents;
mod validation;
mod view;

pub use model::{build_student_dto, student_fields, student_initial_record};
pub use validation::{validate_student, MAX_AGE, MIN_AGE};
pub use view::{StudentDetailsDialog, StudentFormModal};
