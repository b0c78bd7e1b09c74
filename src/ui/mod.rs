//! UI rendering: title bar, text surface and colour picker.

pub mod display;
pub mod log;
pub mod modules;
