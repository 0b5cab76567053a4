//! Terminal color support for formatted summaries.
//!
//! With the `std` feature (default) this uses the `colored` crate, which
//! respects `NO_COLOR`, `TERM` and TTY detection. Without `std` every helper
//! returns plain text.

extern crate alloc;
use alloc::string::String;

#[cfg(feature = "std")]
use colored::Colorize;

#[cfg(feature = "std")]
pub fn green(s: &str) -> String {
    s.green().to_string()
}

#[cfg(feature = "std")]
pub fn bold(s: &str) -> String {
    s.bold().to_string()
}

#[cfg(feature = "std")]
pub fn dim(s: &str) -> String {
    s.dimmed().to_string()
}

#[cfg(feature = "std")]
pub fn dark_red(s: &str) -> String {
    s.red().to_string()
}

#[cfg(feature = "std")]
pub fn bold_green(s: &str) -> String {
    s.green().bold().to_string()
}

#[cfg(feature = "std")]
pub fn bold_yellow(s: &str) -> String {
    s.yellow().bold().to_string()
}

#[cfg(not(feature = "std"))]
pub fn green(s: &str) -> String {
    String::from(s)
}

#[cfg(not(feature = "std"))]
pub fn bold(s: &str) -> String {
    String::from(s)
}

#[cfg(not(feature = "std"))]
pub fn dim(s: &str) -> String {
    String::from(s)
}

#[cfg(not(feature = "std"))]
pub fn dark_red(s: &str) -> String {
    String::from(s)
}

#[cfg(not(feature = "std"))]
pub fn bold_green(s: &str) -> String {
    String::from(s)
}

#[cfg(not(feature = "std"))]
pub fn bold_yellow(s: &str) -> String {
    String::from(s)
}
