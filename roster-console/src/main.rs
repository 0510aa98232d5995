use std::sync::Arc;

use roster_console::{App, Config, logger, ui};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env();
    logger::init_logger(&config.log_level, &config.log_dir);

    let api = config.api.build_employee_service()?;
    tracing::info!(base_url = %api.http().base_url(), "Using employee backend");

    let mut app = App::new(Arc::new(api), &config.start_path);
    ui::run(&mut app).await
}
