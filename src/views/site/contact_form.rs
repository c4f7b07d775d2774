// ============================================================================
// CONTACT FORM - Envío del formulario público `#solicitudForm`
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Element, HtmlButtonElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement,
};

use crate::dom::{get_element_by_id, on_event, query_selector_in, remove_class, set_class_name, set_style, set_text_content};
use crate::models::api::ApiError;
use crate::models::contact::{SolicitudCreada, SolicitudForm};
use crate::models::notice::NoticeKind;
use crate::services::api_client::ApiClient;
use crate::utils::constants::{ALERT_ID, CONTACT_FORM_ID};
use crate::utils::i18n::t;

const FIELD_IDS: [&str; 5] = ["nombre", "email", "telefono", "servicio", "mensaje"];

pub fn alert_class(kind: NoticeKind) -> String {
    format!("alert alert-{} show", kind.as_str())
}

/// Mensaje y tipo del aviso según el resultado del envío
pub fn submission_alert(result: &Result<SolicitudCreada, ApiError>, lang: &str) -> (NoticeKind, String) {
    match result {
        Ok(created) => (NoticeKind::Success, created.message.clone()),
        Err(ApiError::Business(message)) => (NoticeKind::Error, message.clone()),
        Err(ApiError::Connection(detail)) => {
            log::error!("❌ [CONTACT] Error de conexión: {}", detail);
            (NoticeKind::Error, t("error_conexion_formulario", lang))
        }
    }
}

/// `display` de `.btn-text` y `.btn-loader`
pub fn button_displays(loading: bool) -> (&'static str, &'static str) {
    if loading {
        ("none", "block")
    } else {
        ("block", "none")
    }
}

#[derive(Clone)]
struct ContactForm {
    form: HtmlFormElement,
    api: ApiClient,
    language: String,
    alert_duration_ms: u32,
}

/// Registrar el submit si la página tiene el formulario
pub fn mount_contact_form(language: &str, alert_duration_ms: u32) -> Result<(), JsValue> {
    let Some(form) = get_element_by_id(CONTACT_FORM_ID) else {
        return Ok(());
    };
    let form: HtmlFormElement = form.dyn_into()?;

    let contact = ContactForm {
        form: form.clone(),
        api: ApiClient::new(),
        language: language.to_string(),
        alert_duration_ms,
    };

    on_event(&form, "submit", move |event| {
        event.prevent_default();
        contact.submit();
    })?;

    log::debug!("✉️ [CONTACT] Formulario de contacto montado");
    Ok(())
}

impl ContactForm {
    fn submit(&self) {
        let values: Vec<String> = FIELD_IDS.iter().map(|id| field_value(id)).collect();
        let form = SolicitudForm::from_inputs(&values[0], &values[1], &values[2], &values[3], &values[4]);

        if let Err(message) = form.validate(&self.language) {
            log::warn!("⚠️ [CONTACT] Validación fallida: {}", message);
            self.show_alert(NoticeKind::Error, &message);
            return;
        }

        self.set_loading(true);

        let contact = self.clone();
        spawn_local(async move {
            let result = contact.api.submit_solicitud(&form).await;
            let (kind, message) = submission_alert(&result, &contact.language);
            if result.is_ok() {
                contact.form.reset();
            }
            contact.show_alert(kind, &message);
            contact.set_loading(false);
        });
    }

    /// Loader visible + botón deshabilitado mientras se envía
    fn set_loading(&self, loading: bool) {
        let part = |selector: &str| query_selector_in(&self.form, selector).ok().flatten();

        let (text_display, loader_display) = button_displays(loading);
        if let Some(text) = part(".btn-text") {
            let _ = set_style(&text, "display", text_display);
        }
        if let Some(loader) = part(".btn-loader") {
            let _ = set_style(&loader, "display", loader_display);
        }
        if let Some(button) = part(".submit-btn").and_then(|el| el.dyn_into::<HtmlButtonElement>().ok()) {
            button.set_disabled(loading);
        }
    }

    fn show_alert(&self, kind: NoticeKind, message: &str) {
        let Some(alert) = get_element_by_id(ALERT_ID) else {
            log::warn!("⚠️ [CONTACT] Sin #{} para mostrar: {}", ALERT_ID, message);
            return;
        };
        set_text_content(&alert, message);
        set_class_name(&alert, &alert_class(kind));

        Timeout::new(self.alert_duration_ms, move || {
            let _ = remove_class(&alert, "show");
        })
        .forget();
    }
}

/// Valor de un input, select o textarea por id; vacío si no existe
fn field_value(id: &str) -> String {
    let Some(element) = get_element_by_id(id) else {
        return String::new();
    };
    value_of(&element).unwrap_or_default()
}

fn value_of(element: &Element) -> Option<String> {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        return Some(select.value());
    }
    element.dyn_ref::<HtmlTextAreaElement>().map(HtmlTextAreaElement::value)
}
