use anyhow::Context;
use shloka_kernel::settings::Settings;
use shloka_kernel::{InitCtx, ModuleRegistry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().with_context(|| "failed to load shloka settings")?;
    shloka_telemetry::init(&settings.telemetry)?;

    tracing::info!(
        env = ?settings.environment,
        upstream = %settings.upstream.base_url,
        "shloka-app bootstrap starting"
    );

    let mut registry = ModuleRegistry::new();
    shloka_app::modules::register_all(&mut registry);

    let ctx = InitCtx {
        settings: &settings,
    };
    registry.init_modules(&ctx).await?;
    registry.start_modules(&ctx).await?;

    shloka_http::start_server(&registry, &settings).await?;

    registry.stop_modules().await?;

    tracing::info!("shloka-app shut down");
    Ok(())
}
