// src/lib.rs
// #![allow(dead_code)]

#[macro_use]
pub mod macros;

pub mod logger;
pub mod error;
pub mod config;
pub mod core;
pub mod specs;

pub mod model;
pub mod rank;
pub mod chart;
pub mod data;
pub mod csv;
pub mod file;
pub mod gui;
pub mod progress;
pub mod scrape;

#[cfg(feature = "cli")]
pub mod cli;
