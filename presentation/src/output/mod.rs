//! Terminal output rendering

pub mod console;
