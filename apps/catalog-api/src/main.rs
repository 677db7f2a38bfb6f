#[tokio::main]
async fn main() -> anyhow::Result<()> {
    catalog_api::run_server().await
}
