// src/gui/actions/export.rs
use crate::{ gui::app::App, file };

pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    if app.out_path_dirty {
        app.state.options.export.set_path(&app.out_path_text);
        log::info!("Export: Out path set → {}", app.state.options.export.out_path().display());
        app.out_path_dirty = false;
    }

    if app.rows().is_empty() {
        log::debug!("Export: Clicked, but there's nothing to export");
        app.status("Nothing to export");
        return;
    }

    let export = &app.state.options.export;
    log::info!(
        "Export: Begin rows={} format={:?} headers={}",
        app.rows().len(),
        export.format,
        export.include_headers
    );

    let msg = match file::write_export(export, app.rows()) {
        Ok(path) => {
            log::info!("Export: OK {}", path.display());
            format!("Exported to {}", path.display())
        }
        Err(e) => {
            log::error!("Export: Error: {e}");
            format!("Export error: {e}")
        }
    };
    app.status(msg);
}
