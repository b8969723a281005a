use anyhow::Result;
use repolens_config::Config;

/// Run the relay server, applying any bind-address overrides.
pub async fn execute(mut config: Config, host: Option<String>, port: Option<u16>) -> Result<()> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    repolens_web::start_server(&config).await?;
    Ok(())
}
