#[tokio::main]
async fn main() -> anyhow::Result<()> {
    cinedex_lib::run().await
}
