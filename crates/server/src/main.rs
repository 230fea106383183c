#[tokio::main]
async fn main() -> anyhow::Result<()> {
    researcher_server::start().await
}
