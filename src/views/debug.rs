// ============================================================================
// DEBUG - Diagnóstico de layout (solo con DEBUG_LAYOUT=true)
// ============================================================================

use crate::dom::{query_selector, window};
use crate::utils::constants::{HERO_SELECTOR, NAVBAR_SELECTOR, NAV_MENU_SELECTOR};

/// Líneas de diagnóstico: presencia de cada bloque y estilo computado del navbar
pub fn layout_report() -> Vec<String> {
    let mut lines: Vec<String> = [NAVBAR_SELECTOR, NAV_MENU_SELECTOR, HERO_SELECTOR]
        .into_iter()
        .map(|selector| {
            let found = matches!(query_selector(selector), Ok(Some(_)));
            format!("{} {}", selector, if found { "encontrado" } else { "NO encontrado" })
        })
        .collect();

    let Ok(Some(navbar)) = query_selector(NAVBAR_SELECTOR) else {
        return lines;
    };
    match window().and_then(|win| win.get_computed_style(&navbar).ok().flatten()) {
        Some(style) => lines.push(format!(
            "navbar background-color={} display={}",
            style.get_property_value("background-color").unwrap_or_default(),
            style.get_property_value("display").unwrap_or_default(),
        )),
        None => lines.push("navbar sin estilo computado".to_string()),
    }
    lines
}

/// Se pide explícitamente con DEBUG_LAYOUT, así que sale a nivel info
pub fn log_layout_diagnostics() {
    for line in layout_report() {
        log::info!("🔍 [LAYOUT] {}", line);
    }
}
