// src/gui/components/mod.rs
pub mod bar_chart;
pub mod data_table;
pub mod export_bar;
pub mod toolbar;
pub mod top_gainer;
