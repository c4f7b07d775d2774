// ============================================================================
// CONSTANTES - Endpoints de la API y contrato DOM con el HTML del servidor
// ============================================================================

// Endpoints (relativos a CONFIG.api_base_url)
pub const ENDPOINT_MARCAR_LEIDO: &str = "/api/admin/marcar_leido";
pub const ENDPOINT_ACTUALIZAR_ESTADO: &str = "/api/admin/actualizar_estado";
pub const ENDPOINT_ELIMINAR: &str = "/api/admin/eliminar";
pub const ENDPOINT_ESTADISTICAS: &str = "/api/admin/estadisticas";
pub const ENDPOINT_SOLICITUD: &str = "/api/solicitud";

/// Cabecera que el backend usa para distinguir peticiones AJAX
pub const HEADER_REQUESTED_WITH: (&str, &str) = ("X-Requested-With", "XMLHttpRequest");

// Panel de administración
pub const CARD_ID_PREFIX: &str = "solicitud-";
pub const CARD_SELECTOR: &str = "[id^=\"solicitud-\"]";
pub const LIST_SELECTOR: &str = ".solicitudes-list";
pub const MARK_READ_SELECTOR: &str = ".mark-read-btn";
pub const DELETE_SELECTOR: &str = ".delete-btn";
pub const STATUS_SELECT_SELECTOR: &str = ".status-select";
pub const STATUS_LABEL_SELECTOR: &str = ".status";
pub const ACTION_ID_ATTRS: [&str; 2] = ["data-id", "data-solicitud-id"];

pub const UNREAD_CLASS: &str = "unread";
pub const BUSY_CLASS: &str = "is-busy";
pub const READ_BADGE_CLASS: &str = "badge-read";
pub const EMPTY_STATE_CLASS: &str = "empty-state";

pub const TOTAL_COUNTER_ID: &str = "total-solicitudes";
pub const UNREAD_COUNTER_ID: &str = "unread-solicitudes";
pub const READ_COUNTER_ID: &str = "read-solicitudes";

// Sitio público
pub const NAVBAR_SELECTOR: &str = ".navbar";
pub const NAV_MENU_SELECTOR: &str = ".nav-menu";
pub const HAMBURGER_SELECTOR: &str = ".hamburger";
pub const DROPBTN_SELECTOR: &str = ".dropbtn";
pub const DROPDOWN_SELECTOR: &str = ".dropdown";
pub const DROPDOWN_CONTENT_SELECTOR: &str = ".dropdown-content";
pub const MENU_ITEM_SELECTOR: &str = "[role=\"menu\"] a";
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
pub const COUNTER_SELECTOR: &str = "[data-count]";
pub const HERO_SELECTOR: &str = ".hero";

pub const CONTACT_FORM_ID: &str = "solicitudForm";
pub const ALERT_ID: &str = "alert";
