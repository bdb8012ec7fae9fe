use axum::{
    Router,
    extract::Extension,
    routing::{get, post},
};
use dht_ring::placement::handlers::{handle_lookup, handle_store};
use dht_ring::placement::protocol::{ENDPOINT_LOOKUP, ENDPOINT_STORE};
use dht_ring::placement::ring::{Ring, DEFAULT_NODE_IDS};
use dht_ring::storage::node::Node;
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        print_usage(&args[0]);
        std::process::exit(0);
    }

    let (bind_addr, node_ids) = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("Error: {}", e);
            print_usage(&args[0]);
            std::process::exit(1);
        }
    };

    // 1. Ring topology (fixed for the process lifetime):
    let nodes = node_ids.iter().map(|&id| Node::new(id)).collect();
    let ring = Arc::new(Ring::new(nodes)?);

    tracing::info!("Ring constructed with {} member(s):", ring.members().len());
    for node in ring.members() {
        tracing::info!("  - {}", node.id);
    }

    // 2. HTTP Router:
    let app = Router::new()
        .route(ENDPOINT_STORE, post(handle_store))
        .route(&format!("{}/:key", ENDPOINT_LOOKUP), get(handle_lookup))
        .layer(Extension(ring.clone()));

    // 3. Spawn stats reporter:
    let stats_ring = ring.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_secs(30));

        loop {
            interval.tick().await;
            tracing::info!(
                "Ring stats: {} key(s) across {} node(s)",
                stats_ring.total_entry_count(),
                stats_ring.members().len()
            );
            for node in stats_ring.members() {
                tracing::info!("  - {} holds {} key(s)", node.id, node.entry_count());
            }
        }
    });

    // 4. Start HTTP server:
    tracing::info!("HTTP server listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [--bind <addr:port>] [--node <id>]...", program);
    eprintln!("Example: {} --bind 127.0.0.1:7000", program);
    eprintln!(
        "Example: {} --bind 127.0.0.1:7000 --node 5 --node 25 --node 90",
        program
    );
}

/// Parses `--bind` / `--node` flags, falling back to the default member set
/// when no `--node` is given. Flags missing their value are an error, not a
/// panic.
fn parse_args(args: &[String]) -> anyhow::Result<(SocketAddr, Vec<u32>)> {
    let mut bind_addr: SocketAddr = "127.0.0.1:7000".parse()?;
    let mut node_ids: Vec<u32> = vec![];

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| anyhow::anyhow!("--bind requires <addr:port>"))?;
                bind_addr = value.parse()?;
                i += 2;
            }
            "--node" => {
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| anyhow::anyhow!("--node requires <id>"))?;
                node_ids.push(value.parse()?);
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    if node_ids.is_empty() {
        node_ids = DEFAULT_NODE_IDS.to_vec();
    }

    Ok((bind_addr, node_ids))
}

#[cfg(test)]
mod tests {
    use super::parse_args;
    use dht_ring::placement::ring::DEFAULT_NODE_IDS;

    fn argv(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_args_defaults() {
        let (bind_addr, node_ids) = parse_args(&argv(&["dht-ring"])).unwrap();

        assert_eq!(bind_addr, "127.0.0.1:7000".parse().unwrap());
        assert_eq!(node_ids, DEFAULT_NODE_IDS.to_vec());
    }

    #[test]
    fn test_parse_args_bind_and_nodes() {
        let (bind_addr, node_ids) = parse_args(&argv(&[
            "dht-ring",
            "--bind",
            "127.0.0.1:7100",
            "--node",
            "5",
            "--node",
            "25",
        ]))
        .unwrap();

        assert_eq!(bind_addr, "127.0.0.1:7100".parse().unwrap());
        assert_eq!(node_ids, vec![5, 25]);
    }

    #[test]
    fn test_parse_args_trailing_flag_is_error_not_panic() {
        assert!(parse_args(&argv(&["dht-ring", "--node"])).is_err());
        assert!(parse_args(&argv(&["dht-ring", "--bind"])).is_err());
    }
}
