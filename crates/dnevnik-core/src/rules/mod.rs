pub mod validation;

pub use validation::{validate_new_student, validate_required};
