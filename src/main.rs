use nav_menu_lib::config::AppConfig;
use nav_menu_lib::error::AppError;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::load()?;
    let handle = nav_menu_lib::run(config).await?;

    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
    }

    handle.stop().await;
    Ok(())
}
