//! file: lib.rs
//! author: Jacob Xie
//! date: 2026/10/18 09:58:10 Sunday
//! brief:

pub mod app;
pub mod config;
pub mod maze;
pub mod view;
