#[tokio::main]
async fn main() -> anyhow::Result<()> {
    accent_quiz_server::run().await
}
