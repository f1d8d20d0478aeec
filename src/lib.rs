//! TTODO - Terminal To-Do List Library
//!
//! A terminal-based to-do list application built in Rust.

pub mod domain;
pub mod application;
pub mod presentation;

pub use domain::*;
pub use application::*;
