// ============================================================================
// ADMIN PANEL - Binding de eventos + despacho de acciones sobre solicitudes
// ============================================================================
// Flujo: click/change → ID desde data-* → guardia de acción en curso
//        (+ confirmación si es borrado) → HTTP → reconciliación → DOM/toast/stats
// ============================================================================

use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlSelectElement};

use crate::config::CONFIG;
use crate::dom::{
    apply_patch, apply_patches, document, get_attribute, has_class, on_delegated,
    query_selector, query_selector_all, query_selector_in, window, DomPatch,
};
use crate::models::api::AdminAction;
use crate::models::solicitud::{parse_card_dom_id, CardRecord, CardSet, Estado, SolicitudId};
use crate::services::api_client::ApiClient;
use crate::state::admin_state::AdminState;
use crate::utils::constants::{
    ACTION_ID_ATTRS, CARD_SELECTOR, DELETE_SELECTOR, LIST_SELECTOR, MARK_READ_SELECTOR,
    STATUS_LABEL_SELECTOR, STATUS_SELECT_SELECTOR, TOTAL_COUNTER_ID, UNREAD_CLASS,
};
use crate::viewmodels::admin_viewmodel::{AdminSettings, AdminViewModel, StatsRefresh};
use crate::views::notification::show_notification;

/// Panel de administración montado sobre el HTML del servidor
#[derive(Clone)]
pub struct AdminPanel {
    vm: Rc<AdminViewModel>,
    api: ApiClient,
}

impl AdminPanel {
    /// ¿La página actual contiene el panel?
    pub fn is_present() -> bool {
        let has = |selector: &str| matches!(query_selector(selector), Ok(Some(_)));
        has(LIST_SELECTOR) || has(CARD_SELECTOR) || has(format!("#{}", TOTAL_COUNTER_ID).as_str())
    }

    /// Hidratar estado desde el DOM, registrar listeners y cargar contadores
    pub fn mount() -> Result<Self, JsValue> {
        let cards = hydrate_cards()?;
        log::info!("👑 [ADMIN] Panel montado con {} solicitudes", cards.len());

        let state = AdminState::with_cards(cards);
        state.stats.subscribe(|stats| {
            if let Err(e) = apply_patch(&DomPatch::SetCounters(*stats)) {
                log::warn!("⚠️ [ADMIN] No se pudieron actualizar los contadores: {:?}", e);
            }
        });

        let panel = Self {
            vm: Rc::new(AdminViewModel::new(state, AdminSettings::from_config(&CONFIG))),
            api: ApiClient::new(),
        };

        panel.bind_events()?;

        match panel.vm.initial_stats() {
            StatsRefresh::Remote { delay_ms } => panel.schedule_remote_stats(delay_ms),
            StatsRefresh::Local(stats) => log::debug!("📊 [ADMIN] Contadores locales: {:?}", stats),
            StatsRefresh::None => {}
        }

        Ok(panel)
    }

    /// Listeners delegados en document: sirven también para tarjetas añadidas después
    fn bind_events(&self) -> Result<(), JsValue> {
        let document = document().ok_or_else(|| JsValue::from_str("No document"))?;

        {
            let panel = self.clone();
            on_delegated(&document, "click", MARK_READ_SELECTOR, move |control, _event| {
                if let Some(id) = panel.target_id(&control) {
                    panel.dispatch(AdminAction::MarkRead(id));
                }
            })?;
        }

        {
            let panel = self.clone();
            on_delegated(&document, "click", DELETE_SELECTOR, move |control, event| {
                event.prevent_default();
                if let Some(id) = panel.target_id(&control) {
                    panel.dispatch(AdminAction::Delete(id));
                }
            })?;
        }

        {
            let panel = self.clone();
            on_delegated(&document, "change", STATUS_SELECT_SELECTOR, move |control, _event| {
                let Some(id) = panel.target_id(&control) else {
                    return;
                };
                let Some(select) = control.dyn_ref::<HtmlSelectElement>() else {
                    log::warn!("⚠️ [ADMIN] {} no es un <select>", STATUS_SELECT_SELECTOR);
                    return;
                };
                let estado = Estado::from_value(&select.value());
                panel.dispatch(AdminAction::ChangeStatus { id, estado });
            })?;
        }

        log::info!("✅ [ADMIN] Listeners delegados registrados");
        Ok(())
    }

    /// ID de la solicitud a partir del control; registra la tarjeta si no se conocía
    fn target_id(&self, control: &Element) -> Option<SolicitudId> {
        let Some(id) = action_id(control) else {
            log::warn!("⚠️ [ADMIN] Control sin data-id válido, acción ignorada");
            return None;
        };
        if let Ok(Some(card)) = control.closest(CARD_SELECTOR) {
            if let Some(record) = card_record(&card) {
                self.vm.state().ensure_card(record);
            }
        }
        Some(id)
    }

    /// Ejecutar una acción completa
    pub fn dispatch(&self, action: AdminAction) {
        if self.vm.is_busy(&action) {
            log::warn!("⏳ [ADMIN] Solicitud {} con acción en curso, ignorando", action.id());
            return;
        }

        if matches!(action, AdminAction::Delete(_)) && !confirm(&self.vm.confirm_delete_message()) {
            log::info!("🚫 [ADMIN] Borrado de la solicitud {} cancelado", action.id());
            return;
        }

        let Some(busy) = self.vm.begin(&action) else {
            return;
        };
        apply_patches(&busy);

        let panel = self.clone();
        spawn_local(async move {
            let outcome = panel.api.send_action(&action).await;
            match visible_cards() {
                Ok(visible) => panel.vm.sync_visible_cards(visible),
                Err(e) => log::warn!("⚠️ [ADMIN] No se pudieron leer las tarjetas visibles: {:?}", e),
            }
            let reconciliation = panel.vm.complete(&action, &outcome);

            apply_patches(&reconciliation.patches);
            show_notification(&reconciliation.notice);

            if let StatsRefresh::Remote { delay_ms } = reconciliation.stats {
                panel.schedule_remote_stats(delay_ms);
            }
        });
    }

    /// Re-consultar estadísticas tras `delay_ms` (deja asentarse al servidor)
    fn schedule_remote_stats(&self, delay_ms: u32) {
        let panel = self.clone();
        spawn_local(async move {
            if delay_ms > 0 {
                TimeoutFuture::new(delay_ms).await;
            }
            match panel.api.fetch_stats().await {
                Ok(stats) => panel.vm.apply_remote_stats(stats),
                Err(e) => log::error!("❌ [ADMIN] Error cargando estadísticas: {}", e),
            }
        });
    }
}

/// Diálogo bloqueante de confirmación
fn confirm(message: &str) -> bool {
    window()
        .and_then(|win| win.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// ID desde `data-id` o `data-solicitud-id`
pub fn action_id(control: &Element) -> Option<SolicitudId> {
    ACTION_ID_ATTRS
        .iter()
        .filter_map(|attr| get_attribute(control, attr))
        .find_map(|value| value.trim().parse().ok())
}

/// Leer una tarjeta renderizada por el servidor
pub fn card_record(card: &Element) -> Option<CardRecord> {
    let id = parse_card_dom_id(&card.id())?;
    let unread = has_class(card, UNREAD_CLASS);

    let from_select = query_selector_in(card, STATUS_SELECT_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlSelectElement>().ok())
        .map(|select| select.value())
        .filter(|value| !value.is_empty());

    let from_label = || {
        let label = query_selector_in(card, STATUS_LABEL_SELECTOR).ok().flatten()?;
        let class_list = label.class_list();
        (0..class_list.length())
            .filter_map(|index| class_list.item(index))
            .find_map(|class| class.strip_prefix("status-").map(str::to_string))
    };

    let estado = from_select
        .or_else(from_label)
        .map(|value| Estado::from_value(&value))
        .unwrap_or_default();

    Some(CardRecord::new(id, unread, estado))
}

/// Tarjetas presentes ahora mismo en el documento
fn visible_cards() -> Result<Vec<CardRecord>, JsValue> {
    Ok(query_selector_all(CARD_SELECTOR)?
        .iter()
        .filter_map(card_record)
        .collect())
}

fn hydrate_cards() -> Result<CardSet, JsValue> {
    Ok(CardSet::from_records(visible_cards()?))
}
