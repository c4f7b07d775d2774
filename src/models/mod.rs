pub mod solicitud;
pub mod stats;
pub mod api;
pub mod contact;
pub mod notice;

pub use solicitud::{CardRecord, CardSet, Estado, SolicitudId};
pub use stats::{EstadisticasResponse, StatsSnapshot};
pub use api::{ActionKind, ActionOutcome, ActualizarEstadoRequest, AdminAction, ApiError, ApiReply};
pub use contact::{SolicitudCreada, SolicitudForm};
pub use notice::{Notice, NoticeKind};
