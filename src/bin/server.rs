use miette::Result;

#[tokio::main]
async fn main() -> Result<()> {
    vikunja_mcp::cli::run().await
}
