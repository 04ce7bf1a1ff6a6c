//! Core greeting functionality

pub mod greeting;

pub use greeting::{Greeter, greeting_line};
