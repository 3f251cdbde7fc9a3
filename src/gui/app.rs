// src/gui/app.rs
use std::{
    error::Error,
    sync::{ mpsc::{ Receiver, TryRecvError }, Arc, Mutex },
    time::Duration,
};

use eframe::egui;

use crate::{
    chart::BarSeries,
    config::state::AppState,
    data::DataSet,
    error::FetchError,
    scrape::Report,
};

use super::components::{ bar_chart, data_table, export_bar, toolbar, top_gainer };

pub type FetchOutcome = Result<Report, FetchError>;

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "PSX Market Summary",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // last completed fetch, plus the views derived from it
    pub report: Option<Report>,
    pub dataset: DataSet,
    pub chart: BarSeries,
    pub fetch_error: Option<String>,

    // status/progress (worker writes here)
    pub status: Arc<Mutex<String>>,
    pub running: bool,
    pub inbox: Option<Receiver<FetchOutcome>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let out_path_text = state.options.export.out_path().to_string_lossy().into();
        log::info!("Init: url={} selector={}", state.options.fetch.url, state.options.extract.selector);

        Self {
            state,
            out_path_text,
            out_path_dirty: false,
            report: None,
            dataset: DataSet::from_stock_rows(&[]),
            chart: BarSeries::default(),
            fetch_error: None,
            status: Arc::new(Mutex::new(s!("Idle"))),
            running: false,
            inbox: None,
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    #[inline]
    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    #[inline]
    pub fn rows(&self) -> &[crate::model::StockRow] {
        self.report.as_ref().map(|r| r.rows.as_slice()).unwrap_or(&[])
    }

    /// Take a finished fetch off the channel, if there is one.
    fn poll_worker(&mut self) {
        let Some(rx) = &self.inbox else { return };
        match rx.try_recv() {
            Ok(outcome) => {
                self.inbox = None;
                self.running = false;
                self.apply(outcome);
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                log::error!("GUI: worker vanished without a result");
                self.inbox = None;
                self.running = false;
                self.status("Error: fetch worker stopped");
            }
        }
    }

    pub fn apply(&mut self, outcome: FetchOutcome) {
        match outcome {
            Ok(report) => {
                self.dataset = DataSet::from_stock_rows(&report.rows);
                self.chart = report.chart();
                self.fetch_error = None;

                let msg = match report.notices.first() {
                    Some(n) if report.is_empty() => n.to_string(),
                    _ => format!("Loaded {} stock(s)", report.rows.len()),
                };
                log::info!("GUI: {msg}");
                self.status(msg);
                self.report = Some(report);
            }
            Err(e) => {
                log::error!("GUI: fetch failed: {e}");
                self.status(format!("Error fetching market data: {e}"));
                self.fetch_error = Some(e.to_string());
                self.report = None;
                self.dataset = DataSet::from_stock_rows(&[]);
                self.chart = BarSeries::default();
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_worker();
        if self.running {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            toolbar::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("export").show(ctx, |ui| {
            export_bar::draw(ui, self);
        });

        if self.state.gui.show_chart {
            egui::TopBottomPanel::bottom("chart")
                .resizable(true)
                .default_height(220.0)
                .min_height(100.0)
                .show(ctx, |ui| {
                    bar_chart::draw(ui, self);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            top_gainer::draw(ui, self);

            ui.separator();

            data_table::draw(ui, self);
        });
    }
}
