use serde::{Deserialize, Serialize};

use crate::utils::i18n::t;

/// Formulario público de contacto (`POST /api/solicitud`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SolicitudForm {
    pub nombre: String,
    pub email: String,
    pub telefono: String,
    pub servicio: String,
    pub mensaje: String,
}

impl SolicitudForm {
    /// Normaliza los valores tal como vienen de los inputs.
    /// `servicio` es un `<select>` y no se recorta.
    pub fn from_inputs(
        nombre: &str,
        email: &str,
        telefono: &str,
        servicio: &str,
        mensaje: &str,
    ) -> Self {
        Self {
            nombre: nombre.trim().to_string(),
            email: email.trim().to_string(),
            telefono: telefono.trim().to_string(),
            servicio: servicio.to_string(),
            mensaje: mensaje.trim().to_string(),
        }
    }

    /// Mismas reglas que aplica el backend, para evitar el viaje de ida y vuelta
    pub fn validate(&self, lang: &str) -> Result<(), String> {
        let fields = [
            ("nombre", &self.nombre),
            ("email", &self.email),
            ("telefono", &self.telefono),
            ("servicio", &self.servicio),
            ("mensaje", &self.mensaje),
        ];

        if let Some((field, _)) = fields.iter().find(|(_, value)| value.is_empty()) {
            return Err(t("campo_requerido", lang).replace("{field}", field));
        }

        if !self.email.contains('@') {
            return Err(t("email_invalido", lang));
        }

        Ok(())
    }
}

/// Respuesta de éxito de `POST /api/solicitud`
#[derive(Debug, Clone, Deserialize)]
pub struct SolicitudCreada {
    pub message: String,
    #[serde(default)]
    pub id: Option<u64>,
}
