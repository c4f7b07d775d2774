// ============================================================================
// EVENT HANDLING - Sistema de eventos
// ============================================================================
// GESTIÓN DE MEMORY LEAKS:
// - Listeners en elementos del DOM: el navegador los limpia al destruir el
//   elemento, así que closure.forget() es seguro.
// - Listeners globales (window/document): registrarlos UNA SOLA VEZ al montar.
//   La delegación en document cubre también las tarjetas añadidas después.
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventTarget, KeyboardEvent, MouseEvent};

/// Registrar listener genérico
pub fn on_event<F>(target: &EventTarget, event_type: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    // Nota: closure.forget() es necesario para mantener el closure vivo en Rust WASM
    closure.forget();
    Ok(())
}

/// Helper para crear click handler simple
pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Helper para keydown
pub fn on_keydown<F>(target: &EventTarget, handler: F) -> Result<(), JsValue>
where
    F: FnMut(KeyboardEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(KeyboardEvent)>);
    target.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Listener delegado: un solo listener en `root` que resuelve en tiempo de
/// evento el elemento más cercano que coincide con `selector`.
/// Funciona con nodos añadidos después del registro.
pub fn on_delegated<F>(
    root: &EventTarget,
    event_type: &str,
    selector: &'static str,
    mut handler: F,
) -> Result<(), JsValue>
where
    F: FnMut(Element, Event) + 'static,
{
    on_event(root, event_type, move |event: Event| {
        if let Some(matched) = closest_from_event(&event, selector) {
            handler(matched, event);
        }
    })
}

/// Elemento más cercano al target del evento (incluido él mismo) que cumple el selector
pub fn closest_from_event(event: &Event, selector: &str) -> Option<Element> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    target.closest(selector).ok().flatten()
}
