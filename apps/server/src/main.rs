use anyhow::Context;
use folio::domain::config::AppConfig;
use folio::kernel::config::load_config;
use folio_logger::Logger;
use folio_server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg: AppConfig =
        load_config(None::<&str>).context("Critical: Configuration is malformed")?;

    let _log = Logger::builder(env!("CARGO_PKG_NAME")).config(&cfg.logging)?.init()?;

    Server::builder().config(cfg).build().await?.run().await
}
