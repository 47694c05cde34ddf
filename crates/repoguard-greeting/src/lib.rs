//! # repoguard-greeting
//!
//! **Tier 0 (Example)**
//!
//! A single pure function kept as a template for typed library code.

/// Format a greeting for `name`.
///
/// ```
/// assert_eq!(repoguard_greeting::hello("World"), "Hello, World!");
/// ```
pub fn hello(name: &str) -> String {
    format!("Hello, {name}!")
}
