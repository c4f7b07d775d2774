use serde::{Deserialize, Serialize};

/// Contadores agregados del panel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub total: u64,
    pub unread: u64,
    pub read: u64,
}

impl StatsSnapshot {
    /// `read` se deriva de `total - unread` (nunca negativo)
    pub fn new(total: u64, unread: u64) -> Self {
        Self {
            total,
            unread,
            read: total.saturating_sub(unread),
        }
    }
}

/// Respuesta de `GET /api/admin/estadisticas`
#[derive(Debug, Clone, Deserialize)]
pub struct EstadisticasResponse {
    pub total: u64,
    pub no_leidas: u64,
}

impl From<EstadisticasResponse> for StatsSnapshot {
    fn from(response: EstadisticasResponse) -> Self {
        Self::new(response.total, response.no_leidas)
    }
}
