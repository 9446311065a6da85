pub mod directive;
pub mod mem;
pub mod op;
