//! Arithmetic applied by the calculator: binary operators and scientific functions

pub mod binary;
pub mod functions;

pub use binary::BinaryOp;
pub use functions::Function;
