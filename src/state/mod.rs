// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod reactivity;
pub mod admin_state;

pub use reactivity::*;
pub use admin_state::*;
