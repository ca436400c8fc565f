#![deny(warnings)]
pub mod arena;
pub mod config;
pub mod logging;
