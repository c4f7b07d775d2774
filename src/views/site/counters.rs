// ============================================================================
// COUNTERS - Contadores animados `[data-count]` al entrar en pantalla
// ============================================================================

use gloo_timers::future::TimeoutFuture;
use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::dom::{get_attribute, query_selector_all, set_text_content};
use crate::utils::constants::COUNTER_SELECTOR;

/// Fracción visible a partir de la cual arranca la animación
const VISIBILITY_THRESHOLD: f64 = 0.5;

/// Animación lineal de 0 al objetivo en pasos de `frame_ms`
#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    target: u64,
    step: f64,
    current: f64,
}

impl CounterAnimation {
    pub fn new(target: u64, duration_ms: u32, frame_ms: u32) -> Self {
        let frames = (f64::from(duration_ms) / f64::from(frame_ms.max(1))).max(1.0);
        Self {
            target,
            step: target as f64 / frames,
            current: 0.0,
        }
    }

    /// Avanzar un frame: `(texto, terminado)`
    pub fn tick(&mut self) -> (String, bool) {
        self.current += self.step;
        if self.current >= self.target as f64 {
            (format!("{}+", self.target), true)
        } else {
            (format!("{}", self.current.floor() as u64), false)
        }
    }
}

/// Objetivo del contador: los dígitos iniciales ("150+" → 150, "1500 clientes" → 1500)
pub fn parse_count(value: &str) -> Option<u64> {
    let value = value.trim_start();
    let end = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());
    value[..end].parse().ok()
}

/// Observar los contadores y animarlos la primera vez que son visibles
pub fn mount_counters(duration_ms: u32, frame_ms: u32) -> Result<(), JsValue> {
    let counters = query_selector_all(COUNTER_SELECTOR)?;
    if counters.is_empty() {
        return Ok(());
    }

    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if !entry.is_intersecting() {
                continue;
            }
            let element = entry.target();
            observer.unobserve(&element);
            animate_counter(element, duration_ms, frame_ms);
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for counter in &counters {
        observer.observe(counter);
    }

    log::debug!("🔢 [COUNTERS] Observando {} contadores", counters.len());
    Ok(())
}

fn animate_counter(element: Element, duration_ms: u32, frame_ms: u32) {
    let Some(target) = get_attribute(&element, "data-count").as_deref().and_then(parse_count) else {
        log::warn!("⚠️ [COUNTERS] data-count inválido en {}", element.id());
        return;
    };

    let mut animation = CounterAnimation::new(target, duration_ms, frame_ms);
    spawn_local(async move {
        loop {
            TimeoutFuture::new(frame_ms).await;
            let (text, done) = animation.tick();
            set_text_content(&element, &text);
            if done {
                break;
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(mut animation: CounterAnimation) -> Vec<String> {
        let mut frames = Vec::new();
        loop {
            let (text, done) = animation.tick();
            frames.push(text);
            if done || frames.len() > 10_000 {
                return frames;
            }
        }
    }

    #[test]
    fn ends_with_plus_suffix() {
        let frames = run(CounterAnimation::new(150, 2000, 16));
        assert_eq!(frames.last().map(String::as_str), Some("150+"));
        // 2000 / 16 = 125 frames
        assert_eq!(frames.len(), 125);
    }

    #[test]
    fn intermediate_values_are_floored_and_monotonic() {
        let frames = run(CounterAnimation::new(10, 160, 16));
        let values: Vec<u64> = frames[..frames.len() - 1]
            .iter()
            .map(|text| text.parse().unwrap())
            .collect();
        assert!(values.windows(2).all(|pair| pair[0] <= pair[1]));
        assert!(values.iter().all(|value| *value < 10));
    }

    #[test]
    fn zero_target_finishes_immediately() {
        assert_eq!(run(CounterAnimation::new(0, 2000, 16)), vec!["0+".to_string()]);
    }

    #[test]
    fn count_parsing() {
        assert_eq!(parse_count(" 250 "), Some(250));
        assert_eq!(parse_count("150+"), Some(150));
        assert_eq!(parse_count("1500 clientes"), Some(1500));
        assert_eq!(parse_count("muchos"), None);
        assert_eq!(parse_count("+50"), None);
    }
}
