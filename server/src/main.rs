use tokio::net::TcpListener;
use todo_server::{observability, ServerConfig, ServerError};

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    dotenvy::dotenv().ok();
    let config = ServerConfig::from_env()?;
    observability::init_tracing(config.log_format);

    let store = todo_server::open_store(&config)?;
    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "listening");
    todo_server::run(listener, store).await
}
