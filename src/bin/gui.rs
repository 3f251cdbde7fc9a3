// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use std::path::Path;

use eframe::egui::{ IconData, ViewportBuilder };
use image::{ Rgba, RgbaImage };
use log::LevelFilter;

use psx_scrape::{
    config::{ consts::LOG_FILE, state::GuiState },
    gui,
    logger,
};

const ICON_SIZE: u32 = 64;

/// Three rising bars on a dark tile.
fn app_icon() -> IconData {
    let bg = Rgba([0x20, 0x24, 0x2B, 0xFF]);
    let bar = Rgba([0x2E, 0xB8, 0x4B, 0xFF]);

    let mut img = RgbaImage::from_pixel(ICON_SIZE, ICON_SIZE, bg);
    let heights = [20u32, 34, 48];
    let (bar_w, gap, base) = (12u32, 6u32, ICON_SIZE - 8);

    for (i, h) in heights.iter().enumerate() {
        let x0 = 8 + i as u32 * (bar_w + gap);
        for x in x0..x0 + bar_w {
            for y in base - h..base {
                img.put_pixel(x, y, bar);
            }
        }
    }

    let (width, height) = img.dimensions();
    IconData { rgba: img.into_raw(), width, height }
}

fn main() {
    logger::init(Path::new(LOG_FILE), LevelFilter::Info);

    let gui_state = GuiState::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_icon(app_icon())
            .with_inner_size([gui_state.window_w as f32, gui_state.window_h as f32]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        log::error!("GUI failed: {e}");
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
