// ============================================================================
// ADMIN STATE - Estado explícito del panel (tarjetas, acciones en curso, stats)
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::models::api::ActionKind;
use crate::models::solicitud::{CardRecord, CardSet, SolicitudId};
use crate::models::stats::StatsSnapshot;
use crate::state::reactivity::ReactiveState;

/// Estado del panel de administración
#[derive(Clone)]
pub struct AdminState {
    pub cards: Rc<RefCell<CardSet>>,
    /// Acción pendiente de respuesta por ID de solicitud
    pub in_flight: Rc<RefCell<HashMap<SolicitudId, ActionKind>>>,
    pub stats: ReactiveState<StatsSnapshot>,
}

impl AdminState {
    pub fn new() -> Self {
        Self::with_cards(CardSet::new())
    }

    /// Crear estado a partir de las tarjetas hidratadas del HTML
    pub fn with_cards(cards: CardSet) -> Self {
        Self {
            cards: Rc::new(RefCell::new(cards)),
            in_flight: Rc::new(RefCell::new(HashMap::new())),
            stats: ReactiveState::new(StatsSnapshot::default()),
        }
    }

    /// Obtener copia de las tarjetas
    pub fn get_cards(&self) -> CardSet {
        self.cards.borrow().clone()
    }

    /// Reemplazar las tarjetas
    pub fn set_cards(&self, cards: CardSet) {
        *self.cards.borrow_mut() = cards;
    }

    /// Registrar una tarjeta añadida después del montaje
    pub fn ensure_card(&self, card: CardRecord) {
        self.cards.borrow_mut().ensure(card);
    }

    /// Alinear las tarjetas conocidas con las visibles en el documento
    pub fn sync_visible(&self, visible: Vec<CardRecord>) {
        self.cards.borrow_mut().sync_visible(visible);
    }

    pub fn is_in_flight(&self, id: SolicitudId) -> bool {
        self.in_flight.borrow().contains_key(&id)
    }

    pub fn in_flight_kind(&self, id: SolicitudId) -> Option<ActionKind> {
        self.in_flight.borrow().get(&id).copied()
    }

    /// Marcar una acción como en curso; `false` si ya había otra para ese ID
    pub fn try_begin(&self, id: SolicitudId, kind: ActionKind) -> bool {
        let mut in_flight = self.in_flight.borrow_mut();
        if in_flight.contains_key(&id) {
            return false;
        }
        in_flight.insert(id, kind);
        true
    }

    /// Liberar el ID al resolverse la acción
    pub fn finish(&self, id: SolicitudId) {
        self.in_flight.borrow_mut().remove(&id);
    }

    pub fn set_stats(&self, stats: StatsSnapshot) {
        self.stats.set(stats);
    }
}

impl Default for AdminState {
    fn default() -> Self {
        Self::new()
    }
}
