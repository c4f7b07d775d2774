// ============================================================================
// SCROLL - Scroll suave a anclas + efecto del navbar
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::dom::{get_attribute, on_click, on_event, query_selector, query_selector_all, set_style, window};
use crate::utils::constants::{ANCHOR_SELECTOR, NAVBAR_SELECTOR};

/// Estilo del navbar según el desplazamiento vertical
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavbarStyle {
    pub background: &'static str,
    pub box_shadow: &'static str,
}

pub fn navbar_style(scroll_y: f64, threshold: f64) -> NavbarStyle {
    if scroll_y > threshold {
        NavbarStyle {
            background: "rgba(255, 255, 255, 0.98)",
            box_shadow: "0 2px 20px rgba(0, 0, 0, 0.1)",
        }
    } else {
        NavbarStyle {
            background: "rgba(255, 255, 255, 0.95)",
            box_shadow: "none",
        }
    }
}

/// Scroll suave para los enlaces internos (`href="#..."`)
pub fn mount_smooth_scroll() -> Result<(), JsValue> {
    for anchor in query_selector_all(ANCHOR_SELECTOR)? {
        let link = anchor.clone();
        on_click(&anchor, move |e| {
            e.prevent_default();
            let Some(href) = get_attribute(&link, "href") else {
                return;
            };
            // "#" a secas no es un selector válido
            if href.len() <= 1 {
                return;
            }
            match query_selector(&href) {
                Ok(Some(target)) => scroll_to(&target),
                Ok(None) => log::debug!("🔍 [SCROLL] Destino {} no encontrado", href),
                Err(e) => log::warn!("⚠️ [SCROLL] Selector inválido {}: {:?}", href, e),
            }
        })?;
    }
    Ok(())
}

fn scroll_to(target: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Cambiar fondo/sombra del navbar al hacer scroll, una vez por frame
pub fn mount_navbar_effect(threshold: f64) -> Result<(), JsValue> {
    let Some(navbar) = query_selector(NAVBAR_SELECTOR)? else {
        return Ok(());
    };
    let win = window().ok_or_else(|| JsValue::from_str("No window"))?;

    let ticking = Rc::new(Cell::new(false));

    let update = {
        let ticking = ticking.clone();
        let win = win.clone();
        Closure::wrap(Box::new(move || {
            let scroll_y = win.scroll_y().unwrap_or(0.0);
            let style = navbar_style(scroll_y, threshold);
            let _ = set_style(&navbar, "background", style.background);
            let _ = set_style(&navbar, "box-shadow", style.box_shadow);
            ticking.set(false);
        }) as Box<dyn FnMut()>)
    };

    let frame_window = win.clone();
    on_event(&win, "scroll", move |_event| {
        if ticking.get() {
            return;
        }
        if frame_window
            .request_animation_frame(update.as_ref().unchecked_ref())
            .is_ok()
        {
            ticking.set(true);
        }
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_is_solid_past_threshold() {
        let style = navbar_style(150.0, 100.0);
        assert_eq!(style.background, "rgba(255, 255, 255, 0.98)");
        assert_ne!(style.box_shadow, "none");
    }

    #[test]
    fn navbar_is_translucent_at_top() {
        assert_eq!(navbar_style(0.0, 100.0).box_shadow, "none");
        // El umbral en sí aún no cuenta
        assert_eq!(navbar_style(100.0, 100.0).background, "rgba(255, 255, 255, 0.95)");
    }
}
