pub mod gita;

use shloka_kernel::ModuleRegistry;

use crate::utils;

/// Register all project modules with the registry.
pub fn register_all(registry: &mut ModuleRegistry) {
    tracing::debug!(prefix = %utils::log_prefix("gita"), "registering module");
    registry.register(gita::create_module());
}
