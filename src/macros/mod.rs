//! Declarative macros for caught.

// The macros are defined here with #[macro_export], which exports them at crate root
#[macro_use]
mod capture;
