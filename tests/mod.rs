pub mod constraint;
pub mod convert;
