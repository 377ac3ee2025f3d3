use std::net::SocketAddr;

use tracing::info;

use echoform::config::load_settings;
use echoform::router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let settings = load_settings();
    let addr: SocketAddr = settings.bind_addr.parse()?;
    let app = router();

    info!(%addr, "echoform listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
