//! Pure reducers over in-memory records. No I/O, no clock access: the
//! reference instant is always passed in.

pub mod achievements;
pub mod aggregate;
pub mod breakdown;
pub mod comparison;
pub mod streak;

pub use achievements::achievements;
pub use aggregate::aggregate;
pub use breakdown::breakdown;
pub use comparison::compare;
pub use streak::streak;
