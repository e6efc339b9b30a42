use anyhow::Result;
use glossmap::glossary::{loader, AnchorPolicy, GlossaryStore};
use glossmap::http::HttpServer;
use glossmap::Config;

/// Build the anchor policy from configuration.
/// Extracted to avoid duplicating this setup between serve and check paths.
fn anchor_policy(config: &Config) -> AnchorPolicy {
    match &config.glossary.anchor_id {
        Some(id) => AnchorPolicy::Preferred(id.clone()),
        None => AnchorPolicy::FirstInserted,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logger from environment variable or default to info level
    env_logger::Builder::from_env(
        env_logger::Env::default()
            .filter_or("RUST_LOG", "info")
    ).init();

    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();
    let command = args.get(1).map(|s| s.as_str()).unwrap_or("check");

    match command {
        "serve" => {
            // HTTP server mode
            run_server().await?;
        }
        "check" | _ => {
            // Default: load the glossary and report what the core keeps
            run_check()?;
        }
    }

    Ok(())
}

/// Run the HTTP server
async fn run_server() -> Result<()> {
    log::info!("Starting Glossmap v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = Config::load()?;
    log::info!("Glossary data: {}", config.data_path().display());

    // Load and curate the glossary before accepting any request
    let (terms, edges) = loader::load_glossary(config.data_path())?;
    let mut store = GlossaryStore::new(
        anchor_policy(&config),
        config.glossary.collapsed_labels.iter().cloned(),
    );
    store.load(terms, edges);

    let server = HttpServer::new(store, config.http_server.allowed_origins.clone());
    server.run(config.http_server.port).await?;

    Ok(())
}

/// Run glossary data verification
fn run_check() -> Result<()> {
    log::info!("Starting Glossmap v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = Config::load()?;
    log::info!("Configuration loaded successfully");
    log::info!("Glossary data: {}", config.data_path().display());

    let (terms, edges) = loader::load_glossary(config.data_path())?;
    let (raw_terms, raw_edges) = (terms.len(), edges.len());

    let mut store = GlossaryStore::new(
        anchor_policy(&config),
        config.glossary.collapsed_labels.iter().cloned(),
    );
    store.load(terms, edges);

    let graph = store.get_graph();

    println!("\n=== Glossmap Data Check ===\n");
    println!("Data file:  {}", config.data_path().display());
    println!("Terms:      {} raw, {} in core", raw_terms, graph.nodes.len());
    println!("Edges:      {} raw, {} in core", raw_edges, graph.edges.len());

    if graph.nodes.len() < raw_terms {
        println!(
            "\n{} term(s) fall outside the anchored component and will not be served.",
            raw_terms - graph.nodes.len()
        );
    }

    log::info!("Glossary data check complete");

    Ok(())
}
