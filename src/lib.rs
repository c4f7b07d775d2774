// ============================================================================
// SESSVISION WEB - FRONTEND MVVM (RUST PURO)
// ============================================================================
// Arquitectura MVVM:
// - Views: Binding de eventos + aplicación de parches al DOM
// - ViewModels: Reconciliación pura de acciones
// - Services: SOLO comunicación API
// - State: State Management con Rc<RefCell>
// - Models: Estructuras compartidas con backend
// ============================================================================

pub mod config;
pub mod models;
pub mod services;
pub mod viewmodels;
pub mod state;
pub mod dom;
pub mod views;
pub mod utils;
pub mod app;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_logger::Config;

use crate::app::App;
use crate::config::CONFIG;
use crate::dom::{on_event, require_document};

// Instancia global: mantiene vivos los listeners y el estado del panel
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(Config::new(CONFIG.log_level()));
    log::info!("🚀 SessVision Web ({})", CONFIG.environment);

    let document = require_document()?;
    if waits_for_dom(&document.ready_state()) {
        on_event(&document, "DOMContentLoaded", |_event| {
            if let Err(e) = mount_app() {
                log::error!("❌ [MAIN] Error montando la app: {:?}", e);
            }
        })?;
        Ok(())
    } else {
        mount_app()
    }
}

/// Montar una sola vez; llamadas posteriores se ignoran
fn mount_app() -> Result<(), JsValue> {
    if APP.with(|cell| cell.borrow().is_some()) {
        log::warn!("⚠️ [MAIN] App ya montada, ignorando");
        return Ok(());
    }

    let mut app = App::new();
    app.mount()?;

    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });
    log::info!("✅ [MAIN] App montada");
    Ok(())
}

/// `document.readyState` todavía sin parsear: montar en `DOMContentLoaded`
fn waits_for_dom(ready_state: &str) -> bool {
    ready_state == "loading"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mounts_immediately_once_parsed() {
        assert!(waits_for_dom("loading"));
        assert!(!waits_for_dom("interactive"));
        assert!(!waits_for_dom("complete"));
    }
}
