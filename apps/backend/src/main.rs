#[tokio::main]
async fn main() -> anyhow::Result<()> {
    word_check_backend::run().await
}
