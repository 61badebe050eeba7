use anyhow::{Context, Result};
use axum::Router;
use clap::Parser;
use moviematch_core::load::load_corpus;
use moviematch_core::prepare;
use moviematch_server::build_app;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
struct Args {
    /// Movie listing (csv, json, jsonl, or a directory of them)
    #[arg(long, default_value = "IMDB Top 250 Movies.csv")]
    input: String,
    /// Host to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
    /// Port to bind
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();
    let corpus = load_corpus(&args.input).with_context(|| format!("cannot read movie data from '{}'", args.input))?;
    let app: Router = build_app(prepare(corpus));

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
