//! TUI module for sortscope.
//!
//! Application state and key handling live here so they can be tested
//! without a terminal. The `sort-tui` binary owns the terminal I/O.

pub mod sort_app;

pub use sort_app::SortApp;

#[cfg(test)]
mod tests;
