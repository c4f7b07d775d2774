// ============================================================================
// DOM PATCHES - Actualización incremental del DOM del panel
// ============================================================================
// La reconciliación produce una lista de DomPatch (datos puros); este módulo
// es el único que los traduce a mutaciones reales del documento.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{
    add_class, append_child, get_attribute, get_element_by_id, query_selector,
    query_selector_all_in, query_selector_in, remove_attribute, remove_class, replace_element,
    set_attribute, set_class_name, set_text_content, ElementBuilder,
};
use crate::models::solicitud::{card_dom_id, SolicitudId};
use crate::models::stats::StatsSnapshot;
use crate::utils::constants::{
    BUSY_CLASS, EMPTY_STATE_CLASS, LIST_SELECTOR, MARK_READ_SELECTOR, READ_BADGE_CLASS,
    READ_COUNTER_ID, STATUS_LABEL_SELECTOR, TOTAL_COUNTER_ID, UNREAD_CLASS, UNREAD_COUNTER_ID,
};

/// Marca de los controles deshabilitados por una acción en curso
const BUSY_DISABLED_ATTR: &str = "data-busy-disabled";

/// Mutación del DOM derivada de una acción resuelta
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomPatch {
    /// Bloquear/desbloquear los controles de una tarjeta
    SetBusy { id: SolicitudId, busy: bool },
    /// Quitar `unread` y sustituir el botón por la insignia de leída
    MarkCardRead { id: SolicitudId, badge_text: String },
    /// Actualizar texto y clase de la etiqueta de estado
    SetStatus { id: SolicitudId, class_name: String, label: String },
    RemoveCard { id: SolicitudId },
    /// Placeholder de lista vacía
    ShowEmptyState { icon: String, title: String, detail: String },
    SetCounters(StatsSnapshot),
}

/// Aplicar una lista de patches; los que fallan se registran y se saltan
pub fn apply_patches(patches: &[DomPatch]) {
    for patch in patches {
        if let Err(e) = apply_patch(patch) {
            log::warn!("⚠️ [DOM] Patch no aplicado {:?}: {:?}", patch, e);
        }
    }
}

/// Aplicar un patch. Una tarjeta que ya no existe no es un error.
pub fn apply_patch(patch: &DomPatch) -> Result<(), JsValue> {
    match patch {
        DomPatch::SetBusy { id, busy } => {
            if let Some(card) = card_element(*id) {
                set_card_busy(&card, *busy)?;
            }
        }
        DomPatch::MarkCardRead { id, badge_text } => {
            let Some(card) = card_element(*id) else {
                log::debug!("🔍 [DOM] Tarjeta {} no encontrada (mark read)", id);
                return Ok(());
            };
            remove_class(&card, UNREAD_CLASS)?;
            if let Some(button) = query_selector_in(&card, MARK_READ_SELECTOR)? {
                let badge = ElementBuilder::new("span")?
                    .class(READ_BADGE_CLASS)
                    .text(badge_text)
                    .build();
                replace_element(&button, &badge)?;
            }
        }
        DomPatch::SetStatus { id, class_name, label } => {
            let Some(card) = card_element(*id) else {
                return Ok(());
            };
            if let Some(status) = query_selector_in(&card, STATUS_LABEL_SELECTOR)? {
                set_text_content(&status, label);
                set_class_name(&status, class_name);
            }
        }
        DomPatch::RemoveCard { id } => {
            if let Some(card) = card_element(*id) {
                card.remove();
            }
        }
        DomPatch::ShowEmptyState { icon, title, detail } => {
            let Some(list) = query_selector(LIST_SELECTOR)? else {
                return Ok(());
            };
            // Un solo placeholder, y solo si la lista quedó realmente vacía
            if list.child_element_count() > 0 {
                return Ok(());
            }
            list.set_inner_html("");
            let placeholder = ElementBuilder::new("div")?
                .class(EMPTY_STATE_CLASS)
                .child(ElementBuilder::new("div")?.class("empty-icon").text(icon).build())?
                .child(ElementBuilder::new("h4")?.text(title).build())?
                .child(ElementBuilder::new("p")?.text(detail).build())?
                .build();
            append_child(&list, &placeholder)?;
        }
        DomPatch::SetCounters(stats) => {
            let counters = [
                (TOTAL_COUNTER_ID, stats.total),
                (UNREAD_COUNTER_ID, stats.unread),
                (READ_COUNTER_ID, stats.read),
            ];
            for (element_id, value) in counters {
                if let Some(counter) = get_element_by_id(element_id) {
                    set_text_content(&counter, &value.to_string());
                }
            }
        }
    }
    Ok(())
}

fn card_element(id: SolicitudId) -> Option<Element> {
    get_element_by_id(&card_dom_id(id))
}

fn set_card_busy(card: &Element, busy: bool) -> Result<(), JsValue> {
    if busy {
        add_class(card, BUSY_CLASS)?;
        set_attribute(card, "aria-busy", "true")?;
        for control in query_selector_all_in(card, "button, select")? {
            // Solo los que no estaban ya deshabilitados por el servidor
            if get_attribute(&control, "disabled").is_none() {
                set_attribute(&control, "disabled", "")?;
                set_attribute(&control, BUSY_DISABLED_ATTR, "")?;
            }
        }
    } else {
        remove_class(card, BUSY_CLASS)?;
        remove_attribute(card, "aria-busy")?;
        for control in query_selector_all_in(card, &format!("[{}]", BUSY_DISABLED_ATTR))? {
            remove_attribute(&control, "disabled")?;
            remove_attribute(&control, BUSY_DISABLED_ATTR)?;
        }
    }
    Ok(())
}
