pub mod chart_registry;
pub mod dataset_projector;
pub mod format_service;
pub mod placeholder_service;
pub mod submission_service;
pub mod tab_service;
