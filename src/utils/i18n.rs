// ============================================================================
// MÓDULO DE INTERNACIONALIZACIÓN
// ============================================================================

use std::collections::HashMap;

/// Obtener diccionario de traducciones para un idioma
fn get_translations(lang: &str) -> HashMap<&'static str, &'static str> {
    let mut translations = HashMap::new();
    let lang_upper = lang.to_uppercase();

    match lang_upper.as_str() {
        "EN" => {
            // Panel admin
            translations.insert("marcada_leida", "Request marked as read");
            translations.insert("estado_actualizado_a", "Status updated to");
            translations.insert("solicitud_eliminada", "Request deleted");
            translations.insert("error", "Error");
            translations.insert("error_conexion", "Connection error");
            translations.insert(
                "confirmar_eliminar",
                "Are you sure you want to delete this request? This action cannot be undone.",
            );
            translations.insert("leida", "✓ Read");
            translations.insert("sin_solicitudes", "No requests");
            translations.insert(
                "sin_solicitudes_detalle",
                "No requests match the applied filters.",
            );

            // Estados
            translations.insert("estado_pendiente", "⏳ Pending");
            translations.insert("estado_contactado", "✅ Contacted");
            translations.insert("estado_cerrado", "🔒 Closed");

            // Formulario de contacto
            translations.insert(
                "error_conexion_formulario",
                "Connection error. Please try again.",
            );
            translations.insert("campo_requerido", "The field {field} is required");
            translations.insert("email_invalido", "The email is not valid");
        }
        _ => {
            // Panel admin
            translations.insert("marcada_leida", "Solicitud marcada como leída");
            translations.insert("estado_actualizado_a", "Estado actualizado a");
            translations.insert("solicitud_eliminada", "Solicitud eliminada");
            translations.insert("error", "Error");
            translations.insert("error_conexion", "Error de conexión");
            translations.insert(
                "confirmar_eliminar",
                "¿Está seguro de que desea eliminar esta solicitud? Esta acción no se puede deshacer.",
            );
            translations.insert("leida", "✓ Leída");
            translations.insert("sin_solicitudes", "No hay solicitudes");
            translations.insert(
                "sin_solicitudes_detalle",
                "No se encontraron solicitudes con los filtros aplicados.",
            );

            // Estados
            translations.insert("estado_pendiente", "⏳ Pendiente");
            translations.insert("estado_contactado", "✅ Contactado");
            translations.insert("estado_cerrado", "🔒 Cerrado");

            // Formulario de contacto
            translations.insert(
                "error_conexion_formulario",
                "Error de conexión. Por favor, intente nuevamente.",
            );
            translations.insert("campo_requerido", "El campo {field} es requerido");
            translations.insert("email_invalido", "El email no es válido");
        }
    }

    translations
}

/// Función de traducción
///
/// # Arguments
/// * `key` - Clave de traducción
/// * `lang` - Idioma ("ES" o "EN")
///
/// # Returns
/// String traducida o la clave si no se encuentra traducción
pub fn t(key: &str, lang: &str) -> String {
    let translations = get_translations(lang);

    if let Some(translation) = translations.get(key) {
        return translation.to_string();
    }

    // Fallback: devolver la clave si no hay traducción
    key.to_string()
}
