// ============================================================================
// SITE - Comportamiento del sitio público (navegación, scroll, contadores, contacto)
// ============================================================================

pub mod navigation;
pub mod scroll;
pub mod counters;
pub mod contact_form;

use crate::config::AppConfig;

pub use contact_form::mount_contact_form;
pub use counters::mount_counters;
pub use navigation::mount_navigation;
pub use scroll::{mount_navbar_effect, mount_smooth_scroll};

/// Montar cada parte por separado: un fallo no impide el resto
pub fn mount_site(config: &AppConfig) {
    if let Err(e) = mount_navigation() {
        log::error!("❌ [SITE] Navegación: {:?}", e);
    }
    if let Err(e) = mount_smooth_scroll() {
        log::error!("❌ [SITE] Scroll suave: {:?}", e);
    }
    if let Err(e) = mount_navbar_effect(config.navbar_scroll_threshold) {
        log::error!("❌ [SITE] Efecto navbar: {:?}", e);
    }
    if let Err(e) = mount_counters(config.counter_duration_ms, config.counter_frame_ms) {
        log::error!("❌ [SITE] Contadores: {:?}", e);
    }
    if let Err(e) = mount_contact_form(&config.language, config.alert_duration_ms) {
        log::error!("❌ [SITE] Formulario de contacto: {:?}", e);
    }
}
