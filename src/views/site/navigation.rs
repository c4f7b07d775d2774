// ============================================================================
// NAVIGATION - Menú hamburguesa, dropdowns y atajos de teclado
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::dom::{
    closest_from_event, document, get_attribute, on_click, on_event, on_keydown, query_selector,
    query_selector_all, set_attribute, set_style, toggle_class,
};
use crate::utils::constants::{
    DROPBTN_SELECTOR, DROPDOWN_CONTENT_SELECTOR, DROPDOWN_SELECTOR, HAMBURGER_SELECTOR,
    MENU_ITEM_SELECTOR, NAV_MENU_SELECTOR,
};

/// Valor opuesto de `aria-expanded` ("true" → "false", cualquier otro → "true")
pub fn flip_expanded(current: Option<&str>) -> &'static str {
    if current == Some("true") {
        "false"
    } else {
        "true"
    }
}

/// Teclas que activan un item de menú
pub fn activates_menu_item(key: &str) -> bool {
    key == "Enter" || key == " "
}

/// Ocultar todos los dropdowns abiertos
pub fn close_all_dropdowns() {
    match query_selector_all(DROPDOWN_CONTENT_SELECTOR) {
        Ok(dropdowns) => {
            for dropdown in dropdowns {
                let _ = set_style(&dropdown, "display", "none");
            }
        }
        Err(e) => log::warn!("⚠️ [NAV] No se pudieron cerrar los dropdowns: {:?}", e),
    }
}

/// Registrar la navegación; cada parte es opcional según el HTML de la página
pub fn mount_navigation() -> Result<(), JsValue> {
    let document = document().ok_or_else(|| JsValue::from_str("No document"))?;
    let hamburger = query_selector(HAMBURGER_SELECTOR)?;
    let nav_menu = query_selector(NAV_MENU_SELECTOR)?;

    if let (Some(hamburger), Some(nav_menu)) = (hamburger, nav_menu) {
        let button = hamburger.clone();
        on_click(&hamburger, move |_e| {
            let next = flip_expanded(get_attribute(&button, "aria-expanded").as_deref());
            let _ = toggle_class(&button, "active");
            let _ = toggle_class(&nav_menu, "active");
            let _ = set_attribute(&button, "aria-expanded", next);
        })?;

        // Click fuera de un dropdown → cerrar todos
        on_event(&document, "click", |event| {
            let inside = closest_from_event(&event, DROPBTN_SELECTOR).is_some()
                || closest_from_event(&event, DROPDOWN_SELECTOR).is_some();
            if !inside {
                close_all_dropdowns();
            }
        })?;
    }

    if let Some(dropbtn) = query_selector(DROPBTN_SELECTOR)? {
        let button = dropbtn.clone();
        on_click(&dropbtn, move |e| {
            e.prevent_default();
            toggle_dropdown(&button);
        })?;
    }

    on_keydown(&document, |event| {
        if event.key() == "Escape" {
            close_all_dropdowns();
        }
    })?;

    for item in query_selector_all(MENU_ITEM_SELECTOR)? {
        on_keydown(&item, |event| {
            if !activates_menu_item(&event.key()) {
                return;
            }
            event.prevent_default();
            if let Some(target) = event
                .target()
                .and_then(|target| target.dyn_into::<HtmlElement>().ok())
            {
                target.click();
            }
        })?;
    }

    log::debug!("🧭 [NAV] Navegación montada");
    Ok(())
}

fn toggle_dropdown(button: &Element) {
    let was_expanded = get_attribute(button, "aria-expanded").as_deref() == Some("true");
    close_all_dropdowns();

    if let Some(dropdown) = button.next_element_sibling() {
        let display = if was_expanded { "none" } else { "block" };
        let _ = set_style(&dropdown, "display", display);
    }
    let next = if was_expanded { "false" } else { "true" };
    let _ = set_attribute(button, "aria-expanded", next);
}
