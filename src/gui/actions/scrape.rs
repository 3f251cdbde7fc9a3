// src/gui/actions/scrape.rs
use std::{ sync::mpsc, thread };

use eframe::egui;

use crate::{
    gui::app::App,
    gui::progress::GuiProgress,
    scrape,
    specs::SelectorTable,
};

/// Start a fetch on a worker thread. The result comes back through
/// `app.inbox` and is picked up in `App::update`.
pub fn scrape(app: &mut App, ctx: &egui::Context) {
    if app.running {
        log::debug!("Scrape: Clicked while a fetch is running, ignoring");
        return;
    }

    let spec = match SelectorTable::new(&app.state.options.extract.selector) {
        Ok(spec) => spec,
        Err(e) => {
            log::error!("Scrape: {e}");
            app.status(format!("Error: {e}"));
            return;
        }
    };

    let fetch = app.state.options.fetch.clone();
    let policy = app.state.options.extract.coercion;
    log::info!("Scrape: Begin url={} selector={} policy={:?}", fetch.url, spec.css(), policy);

    let (tx, rx) = mpsc::channel();
    let status = app.status.clone();
    let ctx = ctx.clone();

    // Html is not Send, so the whole fetch → report pipeline runs over there.
    let spawned = thread::Builder::new()
        .name(s!("psx-fetch"))
        .spawn(move || {
            let mut prog = GuiProgress::new(status);
            let outcome = scrape::collect(&fetch, &spec, policy, &mut prog);
            // The receiver only goes away if the window closed first.
            let _ = tx.send(outcome);
            ctx.request_repaint();
        });

    match spawned {
        Ok(_) => {
            app.inbox = Some(rx);
            app.running = true;
        }
        Err(e) => {
            log::error!("Scrape: could not start worker: {e}");
            app.status(format!("Error: {e}"));
        }
    }
}
