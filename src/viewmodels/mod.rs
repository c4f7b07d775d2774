pub mod admin_viewmodel;

pub use admin_viewmodel::{reconcile, AdminSettings, AdminViewModel, Reconciliation, StatsRefresh};
