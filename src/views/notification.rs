// ============================================================================
// NOTIFICATION - Toasts efímeros (fire-and-forget)
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::config::CONFIG;
use crate::dom::{append_child, body, set_style, ElementBuilder};
use crate::models::notice::{Notice, NoticeKind};

/// Estilos inline del toast; todos comparten la misma posición fija y se apilan
pub fn notification_styles(kind: NoticeKind) -> Vec<(&'static str, &'static str)> {
    vec![
        ("position", "fixed"),
        ("top", "20px"),
        ("right", "20px"),
        ("z-index", "10000"),
        ("padding", "12px 20px"),
        ("border-radius", "8px"),
        ("color", "white"),
        ("font-weight", "500"),
        ("max-width", "300px"),
        ("box-shadow", "0 4px 12px rgba(0,0,0,0.15)"),
        ("background-color", kind.background()),
    ]
}

pub fn notification_class(kind: NoticeKind) -> String {
    format!("notification notification-{}", kind.as_str())
}

/// Mostrar notificación con la duración configurada
pub fn show_notification(notice: &Notice) {
    if let Err(e) = show_notification_for(
        notice,
        CONFIG.notification_duration_ms,
        CONFIG.notification_fade_ms,
    ) {
        log::error!("❌ [NOTIFY] No se pudo mostrar la notificación '{}': {:?}", notice.message, e);
    }
}

/// Crear el toast, añadirlo al body y programar fade + eliminación
pub fn show_notification_for(notice: &Notice, duration_ms: u32, fade_ms: u32) -> Result<Element, JsValue> {
    let body = body().ok_or_else(|| JsValue::from_str("No body"))?;

    let notification = ElementBuilder::new("div")?
        .class(&notification_class(notice.kind))
        .attr("role", if notice.kind == NoticeKind::Error { "alert" } else { "status" })?
        .text(&notice.message)
        .styles(&notification_styles(notice.kind))?
        .build();

    append_child(&body, &notification)?;

    let toast = notification.clone();
    Timeout::new(duration_ms, move || {
        let _ = set_style(&toast, "transition", &format!("opacity {}ms", fade_ms));
        let _ = set_style(&toast, "opacity", "0");
        let toast_for_removal = toast.clone();
        Timeout::new(fade_ms, move || toast_for_removal.remove()).forget();
    })
    .forget();

    Ok(notification)
}
