pub mod input;
pub mod interpreter;
