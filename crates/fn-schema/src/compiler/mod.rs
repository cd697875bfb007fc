mod argument;
mod field;

pub use argument::ArgumentCompiler;
pub use field::FieldCompiler;
