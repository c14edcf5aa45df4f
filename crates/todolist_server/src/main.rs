use log::info;
use std::error::Error;
use todolist_core::init_logging;
use todolist_server::ServerConfig;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = ServerConfig::from_env()?;
    init_logging(&config.log_level, config.log_dir.as_deref())?;

    let conn = config.open_db()?;
    let listener = TcpListener::bind(config.addr()).await?;
    info!(
        "event=server_start module=http status=ok addr={} db_path={}",
        listener.local_addr()?,
        config.db_path
    );

    todolist_server::run(listener, conn).await?;
    Ok(())
}
