// ============================================================================
// SERVICES - Lectura de archivos y datasets (sin estado de UI)
// ============================================================================

pub mod dataset_service;
pub mod upload_service;

pub use dataset_service::*;
pub use upload_service::*;
