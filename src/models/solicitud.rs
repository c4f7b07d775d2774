use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::stats::StatsSnapshot;
use crate::utils::i18n::t;

/// ID de una solicitud (clave primaria del backend)
pub type SolicitudId = u64;

/// Estado de seguimiento de una solicitud.
///
/// Los valores desconocidos se conservan tal cual en `Otro`: el backend es
/// quien decide si son válidos.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Estado {
    Pendiente,
    Contactado,
    Cerrado,
    Otro(String),
}

impl Estado {
    pub const CONOCIDOS: [Estado; 3] = [Estado::Pendiente, Estado::Contactado, Estado::Cerrado];

    pub fn from_value(value: &str) -> Self {
        match value {
            "pendiente" => Self::Pendiente,
            "contactado" => Self::Contactado,
            "cerrado" => Self::Cerrado,
            other => Self::Otro(other.to_string()),
        }
    }

    /// Valor que viaja en la API y en la clase CSS `status-{valor}`
    pub fn as_value(&self) -> &str {
        match self {
            Self::Pendiente => "pendiente",
            Self::Contactado => "contactado",
            Self::Cerrado => "cerrado",
            Self::Otro(value) => value,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Otro(_))
    }

    /// Texto visible en la etiqueta de estado; los desconocidos se muestran crudos
    pub fn label(&self, lang: &str) -> String {
        match self {
            Self::Pendiente => t("estado_pendiente", lang),
            Self::Contactado => t("estado_contactado", lang),
            Self::Cerrado => t("estado_cerrado", lang),
            Self::Otro(value) => value.clone(),
        }
    }

    pub fn css_class(&self) -> String {
        format!("status status-{}", self.as_value())
    }
}

impl Default for Estado {
    fn default() -> Self {
        Self::Pendiente
    }
}

impl From<String> for Estado {
    fn from(value: String) -> Self {
        Self::from_value(&value)
    }
}

impl From<Estado> for String {
    fn from(estado: Estado) -> Self {
        estado.as_value().to_string()
    }
}

impl fmt::Display for Estado {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_value())
    }
}

/// Tarjeta de solicitud tal como está renderizada en el panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardRecord {
    pub id: SolicitudId,
    pub unread: bool,
    pub estado: Estado,
}

impl CardRecord {
    pub fn new(id: SolicitudId, unread: bool, estado: Estado) -> Self {
        Self { id, unread, estado }
    }
}

pub fn card_dom_id(id: SolicitudId) -> String {
    format!("{}{}", crate::utils::constants::CARD_ID_PREFIX, id)
}

/// Extrae el ID de una tarjeta a partir de su atributo `id` (`solicitud-42` → 42)
pub fn parse_card_dom_id(dom_id: &str) -> Option<SolicitudId> {
    dom_id
        .strip_prefix(crate::utils::constants::CARD_ID_PREFIX)?
        .parse()
        .ok()
}

/// Conjunto de tarjetas visibles, indexado por ID
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardSet {
    cards: BTreeMap<SolicitudId, CardRecord>,
}

impl CardSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = CardRecord>,
    {
        Self {
            cards: records.into_iter().map(|card| (card.id, card)).collect(),
        }
    }

    pub fn get(&self, id: SolicitudId) -> Option<&CardRecord> {
        self.cards.get(&id)
    }

    /// Inserta la tarjeta solo si aún no se conocía (hidratación perezosa)
    pub fn ensure(&mut self, card: CardRecord) {
        self.cards.entry(card.id).or_insert(card);
    }

    /// Alinear con las tarjetas visibles: se añaden las nuevas, se descartan
    /// las que ya no están y las conocidas conservan su estado.
    pub fn sync_visible<I>(&mut self, visible: I)
    where
        I: IntoIterator<Item = CardRecord>,
    {
        let mut next = BTreeMap::new();
        for card in visible {
            let known = self.cards.remove(&card.id).unwrap_or(card);
            next.insert(known.id, known);
        }
        self.cards = next;
    }

    pub fn remove(&mut self, id: SolicitudId) -> Option<CardRecord> {
        self.cards.remove(&id)
    }

    pub fn mark_read(&mut self, id: SolicitudId) {
        if let Some(card) = self.cards.get_mut(&id) {
            card.unread = false;
        }
    }

    pub fn set_estado(&mut self, id: SolicitudId, estado: Estado) {
        if let Some(card) = self.cards.get_mut(&id) {
            card.estado = estado;
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Recuento local de contadores a partir de las tarjetas presentes
    pub fn stats(&self) -> StatsSnapshot {
        let unread = self.cards.values().filter(|card| card.unread).count() as u64;
        let total = self.cards.len() as u64;
        StatsSnapshot::new(total, unread)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estado_round_trips_known_values() {
        for estado in Estado::CONOCIDOS {
            assert_eq!(Estado::from_value(estado.as_value()), estado);
            assert!(estado.is_known());
        }
    }

    #[test]
    fn unknown_estado_is_passed_through() {
        let estado = Estado::from_value("archivado");
        assert_eq!(estado, Estado::Otro("archivado".to_string()));
        assert_eq!(estado.label("ES"), "archivado");
        assert_eq!(estado.css_class(), "status status-archivado");
        assert_eq!(serde_json::to_string(&estado).unwrap(), "\"archivado\"");
    }

    #[test]
    fn estado_labels() {
        assert_eq!(Estado::Pendiente.label("ES"), "⏳ Pendiente");
        assert_eq!(Estado::Contactado.label("ES"), "✅ Contactado");
        assert_eq!(Estado::Cerrado.label("ES"), "🔒 Cerrado");
    }

    #[test]
    fn card_dom_ids() {
        assert_eq!(card_dom_id(42), "solicitud-42");
        assert_eq!(parse_card_dom_id("solicitud-42"), Some(42));
        assert_eq!(parse_card_dom_id("solicitud-"), None);
        assert_eq!(parse_card_dom_id("solicitudes-list"), None);
        assert_eq!(parse_card_dom_id("alert"), None);
    }

    #[test]
    fn card_set_counts() {
        let mut cards = CardSet::from_records([
            CardRecord::new(1, true, Estado::Pendiente),
            CardRecord::new(2, false, Estado::Cerrado),
            CardRecord::new(3, true, Estado::Contactado),
        ]);
        assert_eq!(cards.stats(), StatsSnapshot::new(3, 2));

        cards.mark_read(1);
        cards.remove(2);
        let stats = cards.stats();
        assert_eq!(stats.total, 2);
        assert_eq!(stats.unread, 1);
        assert_eq!(stats.read, 1);
    }

    #[test]
    fn ensure_keeps_existing_record() {
        let mut cards = CardSet::from_records([CardRecord::new(7, false, Estado::Cerrado)]);
        cards.ensure(CardRecord::new(7, true, Estado::Pendiente));
        assert_eq!(cards.get(7), Some(&CardRecord::new(7, false, Estado::Cerrado)));
    }

    #[test]
    fn sync_visible_adds_late_cards_and_drops_gone_ones() {
        let mut cards = CardSet::from_records([
            CardRecord::new(1, false, Estado::Cerrado),
            CardRecord::new(5, true, Estado::Pendiente),
        ]);
        cards.sync_visible([
            CardRecord::new(1, true, Estado::Pendiente),
            CardRecord::new(2, true, Estado::Contactado),
        ]);

        assert_eq!(cards.len(), 2);
        assert_eq!(cards.get(1), Some(&CardRecord::new(1, false, Estado::Cerrado)));
        assert_eq!(cards.get(2), Some(&CardRecord::new(2, true, Estado::Contactado)));
        assert_eq!(cards.get(5), None);
    }
}
