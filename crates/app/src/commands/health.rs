//! Health check command

use std::sync::Arc;
use std::time::Instant;

use crate::context::AppContext;
use crate::utils::health::HealthStatus;
use crate::utils::logging::log_command_execution;

/// Check the health of the wired components.
pub async fn health_check(ctx: &Arc<AppContext>) -> HealthStatus {
    let start = Instant::now();
    let status = ctx.health_check().await;
    log_command_execution("health::health_check", start.elapsed(), status.is_healthy);
    status
}
