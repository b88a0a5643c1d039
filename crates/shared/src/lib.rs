pub mod domain;
pub mod error;
pub mod fields;
pub mod protocol;
