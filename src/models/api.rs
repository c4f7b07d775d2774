use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::solicitud::{Estado, SolicitudId};

/// Acción del panel sobre una solicitud
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminAction {
    MarkRead(SolicitudId),
    ChangeStatus { id: SolicitudId, estado: Estado },
    Delete(SolicitudId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    MarkRead,
    ChangeStatus,
    Delete,
}

impl AdminAction {
    pub fn id(&self) -> SolicitudId {
        match self {
            Self::MarkRead(id) | Self::Delete(id) => *id,
            Self::ChangeStatus { id, .. } => *id,
        }
    }

    pub fn kind(&self) -> ActionKind {
        match self {
            Self::MarkRead(_) => ActionKind::MarkRead,
            Self::ChangeStatus { .. } => ActionKind::ChangeStatus,
            Self::Delete(_) => ActionKind::Delete,
        }
    }
}

/// Cuerpo de `POST /api/admin/actualizar_estado/{id}`
#[derive(Debug, Clone, Serialize)]
pub struct ActualizarEstadoRequest {
    pub estado: Estado,
}

/// Respuesta genérica de los endpoints de acción
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ApiReply {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Errores al hablar con la API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// El servidor respondió pero rechazó la operación (mensaje del backend)
    #[error("{0}")]
    Business(String),
    /// Fallo de red o respuesta que no se pudo interpretar
    #[error("error de conexión: {0}")]
    Connection(String),
}

pub type ActionOutcome = Result<ApiReply, ApiError>;
