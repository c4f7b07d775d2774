// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de UI, solo hace requests HTTP e interpreta las respuestas
// ============================================================================

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::config::CONFIG;
use crate::models::api::{ActionOutcome, ActualizarEstadoRequest, AdminAction, ApiError, ApiReply};
use crate::models::contact::{SolicitudCreada, SolicitudForm};
use crate::models::solicitud::{Estado, SolicitudId};
use crate::models::stats::{EstadisticasResponse, StatsSnapshot};
use crate::utils::constants::{
    ENDPOINT_ACTUALIZAR_ESTADO, ENDPOINT_ELIMINAR, ENDPOINT_ESTADISTICAS, ENDPOINT_MARCAR_LEIDO,
    ENDPOINT_SOLICITUD, HEADER_REQUESTED_WITH,
};

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(&CONFIG.api_base_url)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn action_url(&self, endpoint: &str, id: SolicitudId) -> String {
        format!("{}{}/{}", self.base_url, endpoint, id)
    }

    /// Ejecutar una acción del panel (una sola petición HTTP)
    pub async fn send_action(&self, action: &AdminAction) -> ActionOutcome {
        match action {
            AdminAction::MarkRead(id) => self.mark_read(*id).await,
            AdminAction::ChangeStatus { id, estado } => self.change_status(*id, estado).await,
            AdminAction::Delete(id) => self.delete_request(*id).await,
        }
    }

    /// Marcar solicitud como leída
    pub async fn mark_read(&self, id: SolicitudId) -> ActionOutcome {
        let url = self.action_url(ENDPOINT_MARCAR_LEIDO, id);
        log::info!("📨 [API] Marcando solicitud {} como leída", id);

        let response = Request::post(&url)
            .header(HEADER_REQUESTED_WITH.0, HEADER_REQUESTED_WITH.1)
            .send()
            .await
            .map_err(|e| ApiError::Connection(format!("Network error: {}", e)))?;

        read_response(response).await
    }

    /// Cambiar estado de una solicitud (el valor viaja sin validar)
    pub async fn change_status(&self, id: SolicitudId, estado: &Estado) -> ActionOutcome {
        let url = self.action_url(ENDPOINT_ACTUALIZAR_ESTADO, id);
        if !estado.is_known() {
            log::warn!("⚠️ [API] Estado desconocido '{}' enviado para solicitud {}", estado, id);
        }
        log::info!("📝 [API] Actualizando estado de solicitud {} → {}", id, estado);

        let body = ActualizarEstadoRequest { estado: estado.clone() };
        let response = Request::post(&url)
            .header(HEADER_REQUESTED_WITH.0, HEADER_REQUESTED_WITH.1)
            .json(&body)
            .map_err(|e| ApiError::Connection(format!("Serialization error: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Connection(format!("Network error: {}", e)))?;

        read_response(response).await
    }

    /// Eliminar solicitud (la confirmación es responsabilidad de la vista)
    pub async fn delete_request(&self, id: SolicitudId) -> ActionOutcome {
        let url = self.action_url(ENDPOINT_ELIMINAR, id);
        log::info!("🗑️ [API] Eliminando solicitud {}", id);

        let response = Request::post(&url)
            .header(HEADER_REQUESTED_WITH.0, HEADER_REQUESTED_WITH.1)
            .send()
            .await
            .map_err(|e| ApiError::Connection(format!("Network error: {}", e)))?;

        read_response(response).await
    }

    /// Obtener contadores agregados
    pub async fn fetch_stats(&self) -> Result<StatsSnapshot, ApiError> {
        let url = format!("{}{}", self.base_url, ENDPOINT_ESTADISTICAS);

        let response = Request::get(&url)
            .header(HEADER_REQUESTED_WITH.0, HEADER_REQUESTED_WITH.1)
            .send()
            .await
            .map_err(|e| ApiError::Connection(format!("Network error: {}", e)))?;

        let stats: EstadisticasResponse = read_response(response).await?;
        log::debug!("📊 [API] Estadísticas: total={} no_leidas={}", stats.total, stats.no_leidas);
        Ok(stats.into())
    }

    /// Enviar el formulario público de contacto
    pub async fn submit_solicitud(&self, form: &SolicitudForm) -> Result<SolicitudCreada, ApiError> {
        let url = format!("{}{}", self.base_url, ENDPOINT_SOLICITUD);
        log::info!("✉️ [API] Enviando solicitud de contacto ({})", form.servicio);

        let response = Request::post(&url)
            .json(form)
            .map_err(|e| ApiError::Connection(format!("Serialization error: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Connection(format!("Network error: {}", e)))?;

        read_response(response).await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

async fn read_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Connection(format!("Read error: {}", e)))?;
    interpret_response(status, &body)
}

/// Interpreta status + cuerpo de una respuesta de la API.
///
/// - cuerpo no JSON → `Connection` (respuesta malformada)
/// - status fuera de 2xx, o campo `error` presente → `Business` con el mensaje del servidor
/// - en otro caso → cuerpo deserializado
pub fn interpret_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| ApiError::Connection(format!("Parse error (HTTP {}): {}", status, e)))?;

    let server_error = value
        .get("error")
        .and_then(|error| error.as_str())
        .map(str::to_string);

    if !(200..300).contains(&status) {
        return Err(ApiError::Business(
            server_error.unwrap_or_else(|| format!("HTTP {}", status)),
        ));
    }

    if let Some(message) = server_error {
        return Err(ApiError::Business(message));
    }

    serde_json::from_value(value).map_err(|e| ApiError::Connection(format!("Parse error: {}", e)))
}

/// Igual que `interpret_response` para las respuestas genéricas de acción
pub fn interpret_action_response(status: u16, body: &str) -> ActionOutcome {
    interpret_response::<ApiReply>(status, body)
}
