//! Small math value types.

mod bool_vector;
pub use self::bool_vector::BoolVector;
