mod config;
mod probe;

use config::ProbeConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 初始化日志
    env_logger::init();

    let mut config = ProbeConfig::new()?;
    config.apply_env()?;

    log::info!(
        "{} {} probing device {} with attributes {:?}",
        config.app_name,
        config.app_version,
        config.device_label(),
        config.attributes,
    );

    let device = probe::open_device(&config)?;
    let context = probe::create_context(&device, &config)?;

    let report = probe::inspect(&context, &config);
    println!("{}", serde_json::to_string(&report)?);

    if report.made_current {
        probe::hold(config.hold_secs).await;
    }

    probe::release(context);
    probe::close(device)?;

    if !(report.made_current && report.current_matches && report.device_matches) {
        anyhow::bail!("Probe finished with mismatches: {:?}", report);
    }
    log::info!("Probe finished cleanly");
    Ok(())
}
