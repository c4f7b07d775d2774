// ============================================================================
// APP - Punto de montaje sobre el HTML que sirve el backend
// ============================================================================
// No hay render propio: la página ya existe y aquí solo se engancha
// comportamiento (sitio público y, si está presente, el panel de admin).
// ============================================================================

use wasm_bindgen::prelude::*;

use crate::config::CONFIG;
use crate::views::{log_layout_diagnostics, mount_site, AdminPanel};

/// Aplicación principal
pub struct App {
    admin: Option<AdminPanel>,
}

impl App {
    pub fn new() -> Self {
        Self { admin: None }
    }

    /// Enganchar todo el comportamiento de la página actual
    pub fn mount(&mut self) -> Result<(), JsValue> {
        mount_site(&CONFIG);

        if AdminPanel::is_present() {
            self.admin = Some(AdminPanel::mount()?);
        } else {
            log::debug!("ℹ️ [APP] Página sin panel de administración");
        }

        if CONFIG.debug_layout {
            log_layout_diagnostics();
        }

        log::info!("✅ [APP] Página montada (panel admin: {})", self.admin.is_some());
        Ok(())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
