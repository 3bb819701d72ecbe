pub mod default_program;
pub mod program;
