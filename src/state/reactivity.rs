// ============================================================================
// REACTIVITY - Sistema de notificaciones/subscribers para reactividad
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

type Callback<T> = Rc<dyn Fn(&T)>;

/// Estado reactivo con sistema de notificaciones.
/// Los clones comparten valor y subscribers.
pub struct ReactiveState<T> {
    value: Rc<RefCell<T>>,
    subscribers: Rc<RefCell<Vec<Callback<T>>>>,
}

impl<T: Clone> ReactiveState<T> {
    /// Crear nuevo estado reactivo
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Establecer nuevo valor y notificar subscribers
    pub fn set(&self, new_value: T) {
        *self.value.borrow_mut() = new_value;
        self.notify();
    }

    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }

    /// Suscribirse a cambios
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn(&T) + 'static,
    {
        self.subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Notificar a todos los subscribers con una copia del valor.
    /// Ningún borrow queda vivo durante los callbacks: pueden llamar a `set` o `subscribe`.
    fn notify(&self) {
        let subscribers: Vec<Callback<T>> = self.subscribers.borrow().clone();
        let value = self.get();
        for callback in subscribers {
            callback(&value);
        }
    }
}

impl<T> Clone for ReactiveState<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            subscribers: self.subscribers.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn subscribers_receive_new_value() {
        let state = ReactiveState::new(0u32);
        let seen = Rc::new(Cell::new(0u32));
        {
            let seen = seen.clone();
            state.subscribe(move |value| seen.set(*value));
        }

        state.set(5);
        assert_eq!(seen.get(), 5);

        state.set(7);
        assert_eq!(seen.get(), 7);
        assert_eq!(state.get(), 7);
    }

    #[test]
    fn clones_share_value_and_subscribers() {
        let state = ReactiveState::new(String::from("a"));
        let calls = Rc::new(Cell::new(0));
        {
            let calls = calls.clone();
            state.subscribe(move |_| calls.set(calls.get() + 1));
        }

        let other = state.clone();
        other.set("b".to_string());
        assert_eq!(calls.get(), 1);
        assert_eq!(state.get(), "b");
    }

    #[test]
    fn subscriber_may_set_during_notification() {
        let state = ReactiveState::new(1u32);
        {
            let inner = state.clone();
            state.subscribe(move |value| {
                // Normalizar a par sin re-entrar infinitamente
                if value % 2 == 1 {
                    inner.set(value + 1);
                }
            });
        }

        state.set(3);
        assert_eq!(state.get(), 4);
    }
}
