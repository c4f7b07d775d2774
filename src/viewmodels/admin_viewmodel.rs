// ============================================================================
// ADMIN VIEWMODEL - LÓGICA DEL PANEL DE SOLICITUDES
// ============================================================================
// Sin DOM ni red: decide qué hacer con cada acción y con su resultado.
// La vista aplica los DomPatch, muestra el Notice y lanza el refresco remoto.
// ============================================================================

use crate::config::{AppConfig, StatsStrategy};
use crate::dom::patch::DomPatch;
use crate::models::api::{ActionOutcome, AdminAction, ApiError};
use crate::models::notice::Notice;
use crate::models::solicitud::{CardRecord, CardSet};
use crate::models::stats::StatsSnapshot;
use crate::state::admin_state::AdminState;
use crate::utils::i18n::t;

/// Ajustes del panel que afectan a la reconciliación
#[derive(Debug, Clone, PartialEq)]
pub struct AdminSettings {
    pub language: String,
    pub stats_strategy: StatsStrategy,
    pub stats_refresh_delay_ms: u32,
}

impl AdminSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            language: config.language.clone(),
            stats_strategy: config.stats_strategy,
            stats_refresh_delay_ms: config.stats_refresh_delay_ms,
        }
    }
}

impl Default for AdminSettings {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

/// Qué hacer con los contadores tras una acción
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatsRefresh {
    None,
    /// Re-consultar el endpoint de estadísticas pasado `delay_ms`
    Remote { delay_ms: u32 },
    /// Contadores recalculados a partir de las tarjetas
    Local(StatsSnapshot),
}

/// Resultado puro de reconciliar una acción resuelta
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciliation {
    pub cards: CardSet,
    pub patches: Vec<DomPatch>,
    pub notice: Notice,
    pub stats: StatsRefresh,
}

/// (tarjetas, acción, resultado) → (nuevas tarjetas, patches, notificación, stats).
///
/// Solo un resultado exitoso modifica la tarjeta; un error únicamente libera
/// el bloqueo puesto al iniciar la acción.
pub fn reconcile(
    cards: &CardSet,
    action: &AdminAction,
    outcome: &ActionOutcome,
    settings: &AdminSettings,
) -> Reconciliation {
    let lang = settings.language.as_str();
    let id = action.id();
    let release = DomPatch::SetBusy { id, busy: false };

    let reply = match outcome {
        Ok(reply) => reply,
        Err(error) => {
            let notice = match error {
                ApiError::Business(message) => {
                    Notice::error(format!("{}: {}", t("error", lang), message))
                }
                ApiError::Connection(_) => Notice::error(t("error_conexion", lang)),
            };
            return Reconciliation {
                cards: cards.clone(),
                patches: vec![release],
                notice,
                stats: StatsRefresh::None,
            };
        }
    };

    let mut next = cards.clone();
    let mut patches = Vec::new();
    let mut refresh = false;

    let notice = match action {
        AdminAction::MarkRead(id) => {
            next.mark_read(*id);
            patches.push(release);
            patches.push(DomPatch::MarkCardRead {
                id: *id,
                badge_text: t("leida", lang),
            });
            refresh = true;
            Notice::success(t("marcada_leida", lang))
        }
        AdminAction::ChangeStatus { id, estado } => {
            next.set_estado(*id, estado.clone());
            patches.push(release);
            patches.push(DomPatch::SetStatus {
                id: *id,
                class_name: estado.css_class(),
                label: estado.label(lang),
            });
            Notice::success(format!("{} {}", t("estado_actualizado_a", lang), estado))
        }
        AdminAction::Delete(id) => {
            next.remove(*id);
            patches.push(DomPatch::RemoveCard { id: *id });
            if next.is_empty() {
                patches.push(DomPatch::ShowEmptyState {
                    icon: "📭".to_string(),
                    title: t("sin_solicitudes", lang),
                    detail: t("sin_solicitudes_detalle", lang),
                });
            }
            refresh = true;
            Notice::success(t("solicitud_eliminada", lang))
        }
    };

    if let Some(message) = &reply.message {
        log::debug!("📨 [ADMIN] Respuesta del servidor para {}: {}", id, message);
    }

    let stats = if !refresh {
        StatsRefresh::None
    } else {
        match settings.stats_strategy {
            StatsStrategy::Remote => StatsRefresh::Remote {
                delay_ms: settings.stats_refresh_delay_ms,
            },
            StatsStrategy::Local => StatsRefresh::Local(next.stats()),
        }
    };

    Reconciliation {
        cards: next,
        patches,
        notice,
        stats,
    }
}

/// ViewModel del panel - estado + reconciliación
pub struct AdminViewModel {
    state: AdminState,
    settings: AdminSettings,
}

impl AdminViewModel {
    pub fn new(state: AdminState, settings: AdminSettings) -> Self {
        Self { state, settings }
    }

    pub fn state(&self) -> &AdminState {
        &self.state
    }

    /// Texto del diálogo de confirmación de borrado
    pub fn confirm_delete_message(&self) -> String {
        t("confirmar_eliminar", &self.settings.language)
    }

    pub fn is_busy(&self, action: &AdminAction) -> bool {
        self.state.is_in_flight(action.id())
    }

    /// Registrar el inicio de una acción.
    /// `None` si ya hay otra en curso para ese ID (el disparo se ignora).
    pub fn begin(&self, action: &AdminAction) -> Option<Vec<DomPatch>> {
        let id = action.id();
        if !self.state.try_begin(id, action.kind()) {
            log::warn!(
                "⏳ [ADMIN] Acción {:?} ignorada: la solicitud {} ya tiene una acción en curso ({:?})",
                action.kind(),
                id,
                self.state.in_flight_kind(id)
            );
            return None;
        }
        Some(vec![DomPatch::SetBusy { id, busy: true }])
    }

    /// Incorporar las tarjetas renderizadas después del montaje antes de
    /// recontar o decidir si la lista quedó vacía
    pub fn sync_visible_cards(&self, visible: Vec<CardRecord>) {
        self.state.sync_visible(visible);
    }

    /// Cerrar una acción: actualiza el estado y devuelve lo que la vista debe aplicar
    pub fn complete(&self, action: &AdminAction, outcome: &ActionOutcome) -> Reconciliation {
        let reconciliation = reconcile(&self.state.get_cards(), action, outcome, &self.settings);

        self.state.set_cards(reconciliation.cards.clone());
        self.state.finish(action.id());

        match outcome {
            Ok(_) => log::info!("✅ [ADMIN] {:?} sobre solicitud {} completada", action.kind(), action.id()),
            Err(ApiError::Business(message)) => {
                log::warn!("⚠️ [ADMIN] {:?} rechazada por el servidor: {}", action.kind(), message)
            }
            Err(error) => log::error!("❌ [ADMIN] {:?} falló: {}", action.kind(), error),
        }

        if let StatsRefresh::Local(stats) = &reconciliation.stats {
            self.state.set_stats(*stats);
        }

        reconciliation
    }

    /// Estrategia de la carga inicial de contadores al montar el panel
    pub fn initial_stats(&self) -> StatsRefresh {
        match self.settings.stats_strategy {
            StatsStrategy::Remote => StatsRefresh::Remote { delay_ms: 0 },
            StatsStrategy::Local => {
                let stats = self.state.get_cards().stats();
                self.state.set_stats(stats);
                StatsRefresh::Local(stats)
            }
        }
    }

    /// Proyectar en el estado los contadores devueltos por el servidor
    pub fn apply_remote_stats(&self, stats: StatsSnapshot) {
        self.state.set_stats(stats);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::api::ApiReply;
    use crate::models::notice::NoticeKind;
    use crate::models::solicitud::Estado;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn settings(strategy: StatsStrategy) -> AdminSettings {
        AdminSettings {
            language: "ES".to_string(),
            stats_strategy: strategy,
            stats_refresh_delay_ms: 500,
        }
    }

    fn cards() -> CardSet {
        CardSet::from_records([
            CardRecord::new(42, true, Estado::Pendiente),
            CardRecord::new(43, false, Estado::Contactado),
        ])
    }

    fn ok() -> ActionOutcome {
        Ok(ApiReply::default())
    }

    /// Patches que cambian la tarjeta (todo salvo liberar el bloqueo)
    fn card_mutations(patches: &[DomPatch]) -> Vec<&DomPatch> {
        patches
            .iter()
            .filter(|patch| !matches!(patch, DomPatch::SetBusy { busy: false, .. }))
            .collect()
    }

    #[test]
    fn mark_read_success_clears_unread_and_swaps_control() {
        for id in [42, 43, 1_000_000] {
            let mut set = cards();
            set.ensure(CardRecord::new(id, true, Estado::Pendiente));
            let result = reconcile(&set, &AdminAction::MarkRead(id), &ok(), &settings(StatsStrategy::Remote));

            assert!(!result.cards.get(id).unwrap().unread);
            assert!(result.patches.contains(&DomPatch::MarkCardRead {
                id,
                badge_text: "✓ Leída".to_string()
            }));
            assert_eq!(result.notice, Notice::success("Solicitud marcada como leída"));
            assert_eq!(result.stats, StatsRefresh::Remote { delay_ms: 500 });
        }
    }

    #[test]
    fn change_status_uses_mapped_label() {
        let expected = [
            (Estado::Pendiente, "⏳ Pendiente"),
            (Estado::Contactado, "✅ Contactado"),
            (Estado::Cerrado, "🔒 Cerrado"),
        ];
        for (estado, label) in expected {
            let action = AdminAction::ChangeStatus { id: 43, estado: estado.clone() };
            let result = reconcile(&cards(), &action, &ok(), &settings(StatsStrategy::Remote));

            assert!(result.patches.contains(&DomPatch::SetStatus {
                id: 43,
                class_name: format!("status status-{}", estado.as_value()),
                label: label.to_string(),
            }));
            assert_eq!(result.cards.get(43).unwrap().estado, estado);
            assert_eq!(
                result.notice.message,
                format!("Estado actualizado a {}", estado.as_value())
            );
            assert_eq!(result.stats, StatsRefresh::None);
        }
    }

    #[test]
    fn unknown_status_is_shown_raw() {
        let action = AdminAction::ChangeStatus { id: 42, estado: Estado::from_value("archivado") };
        let result = reconcile(&cards(), &action, &ok(), &settings(StatsStrategy::Remote));
        assert!(result.patches.contains(&DomPatch::SetStatus {
            id: 42,
            class_name: "status status-archivado".to_string(),
            label: "archivado".to_string(),
        }));
    }

    #[test]
    fn deleting_last_card_shows_single_empty_state() {
        let set = CardSet::from_records([CardRecord::new(42, true, Estado::Pendiente)]);
        let result = reconcile(&set, &AdminAction::Delete(42), &ok(), &settings(StatsStrategy::Local));

        assert!(result.cards.is_empty());
        let empty_states = result
            .patches
            .iter()
            .filter(|patch| matches!(patch, DomPatch::ShowEmptyState { .. }))
            .count();
        assert_eq!(empty_states, 1);
        assert_eq!(result.patches[0], DomPatch::RemoveCard { id: 42 });
        assert_eq!(result.stats, StatsRefresh::Local(StatsSnapshot::new(0, 0)));
    }

    #[test]
    fn deleting_one_of_many_keeps_list() {
        let result = reconcile(&cards(), &AdminAction::Delete(42), &ok(), &settings(StatsStrategy::Local));
        assert_eq!(result.patches, vec![DomPatch::RemoveCard { id: 42 }]);
        // La tarjeta borrada ya no cuenta
        assert_eq!(result.stats, StatsRefresh::Local(StatsSnapshot::new(1, 0)));
    }

    #[test]
    fn business_error_reports_message_without_mutation() {
        let outcome = Err(ApiError::Business("X".to_string()));
        for action in [
            AdminAction::MarkRead(42),
            AdminAction::ChangeStatus { id: 42, estado: Estado::Cerrado },
            AdminAction::Delete(42),
        ] {
            let result = reconcile(&cards(), &action, &outcome, &settings(StatsStrategy::Remote));
            assert_eq!(result.notice.kind, NoticeKind::Error);
            assert!(result.notice.message.contains('X'));
            assert_eq!(result.notice.message, "Error: X");
            assert!(card_mutations(&result.patches).is_empty());
            assert_eq!(result.cards, cards());
            assert_eq!(result.stats, StatsRefresh::None);
        }
    }

    #[test]
    fn connection_error_reports_generic_message() {
        let outcome = Err(ApiError::Connection("Network error: failed to fetch".to_string()));
        let result = reconcile(&cards(), &AdminAction::MarkRead(42), &outcome, &settings(StatsStrategy::Remote));
        assert_eq!(result.notice, Notice::error("Error de conexión"));
        assert_eq!(result.patches, vec![DomPatch::SetBusy { id: 42, busy: false }]);
        assert!(result.cards.get(42).unwrap().unread);
    }

    #[test]
    fn repeat_trigger_is_ignored_until_resolution() {
        let vm = AdminViewModel::new(AdminState::with_cards(cards()), settings(StatsStrategy::Remote));
        let action = AdminAction::MarkRead(42);

        assert_eq!(vm.begin(&action), Some(vec![DomPatch::SetBusy { id: 42, busy: true }]));
        assert!(vm.is_busy(&action));
        assert_eq!(vm.begin(&action), None);
        assert_eq!(vm.begin(&AdminAction::Delete(42)), None);
        // Otra tarjeta no se ve afectada
        assert!(vm.begin(&AdminAction::MarkRead(43)).is_some());

        vm.complete(&action, &ok());
        assert!(!vm.is_busy(&action));
        assert!(vm.begin(&AdminAction::Delete(42)).is_some());
    }

    #[test]
    fn failed_action_also_releases_the_id() {
        let vm = AdminViewModel::new(AdminState::with_cards(cards()), settings(StatsStrategy::Remote));
        let action = AdminAction::Delete(43);
        vm.begin(&action);
        vm.complete(&action, &Err(ApiError::Connection("offline".into())));
        assert!(!vm.is_busy(&action));
        assert_eq!(vm.state().get_cards().len(), 2);
    }

    #[test]
    fn local_strategy_pushes_stats_to_subscribers() {
        let state = AdminState::with_cards(cards());
        let seen = Rc::new(RefCell::new(Vec::new()));
        {
            let seen = seen.clone();
            state.stats.subscribe(move |stats| seen.borrow_mut().push(*stats));
        }
        let vm = AdminViewModel::new(state, settings(StatsStrategy::Local));

        assert_eq!(vm.initial_stats(), StatsRefresh::Local(StatsSnapshot::new(2, 1)));
        let action = AdminAction::MarkRead(42);
        vm.begin(&action);
        vm.complete(&action, &ok());

        assert_eq!(
            *seen.borrow(),
            vec![StatsSnapshot::new(2, 1), StatsSnapshot::new(2, 0)]
        );
    }

    #[test]
    fn marcar_leido_42_then_remote_stats() {
        // solicitud-42 con `unread`; marcar_leido/42 → 200 {}; estadísticas {total:5, no_leidas:2}
        let outcome = crate::services::interpret_action_response(200, "{}");
        let vm = AdminViewModel::new(AdminState::with_cards(cards()), settings(StatsStrategy::Remote));
        let action = AdminAction::MarkRead(42);

        vm.begin(&action);
        let result = vm.complete(&action, &outcome);
        assert!(!vm.state().get_cards().get(42).unwrap().unread);
        assert!(matches!(result.patches[1], DomPatch::MarkCardRead { id: 42, .. }));
        assert_eq!(result.stats, StatsRefresh::Remote { delay_ms: 500 });

        let stats: crate::models::stats::EstadisticasResponse =
            crate::services::interpret_response(200, r#"{"total":5,"no_leidas":2}"#).unwrap();
        vm.apply_remote_stats(stats.into());
        assert_eq!(vm.state().stats.get(), StatsSnapshot { total: 5, unread: 2, read: 3 });
    }

    #[test]
    fn late_cards_count_after_deleting_the_last_hydrated_one() {
        // Tarjeta 1 hidratada al montar; la 2 llegó después y nunca se tocó
        let state = AdminState::with_cards(CardSet::from_records([CardRecord::new(1, true, Estado::Pendiente)]));
        let vm = AdminViewModel::new(state, settings(StatsStrategy::Local));
        let action = AdminAction::Delete(1);

        vm.begin(&action);
        vm.sync_visible_cards(vec![
            CardRecord::new(1, true, Estado::Pendiente),
            CardRecord::new(2, true, Estado::Contactado),
        ]);
        let result = vm.complete(&action, &ok());

        assert_eq!(result.stats, StatsRefresh::Local(StatsSnapshot::new(1, 1)));
        assert!(!result
            .patches
            .iter()
            .any(|patch| matches!(patch, DomPatch::ShowEmptyState { .. })));
        assert_eq!(vm.state().stats.get(), StatsSnapshot::new(1, 1));
    }
}
