//! Shared UI crate for Somnoview. Report transformation logic and views live here.

pub mod core;
pub mod report;
pub mod views;

mod navbar;
pub use navbar::Navbar;
