pub mod entities;
pub mod errors;
pub mod validation;
pub mod value_objects;
