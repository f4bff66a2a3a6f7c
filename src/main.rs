//! Dugout - a dig-style DNS lookup tool.
//!
//! Sends one query to one upstream server over UDP and prints the reply in
//! dig's report format.

use dugout::config::load_config;
use dugout::dns::{Digger, Name, Question, RecordClass, RecordType};
use dugout::logging::init_logging;

use std::net::SocketAddr;
use std::process;
use std::time::{Duration, Instant};

fn print_usage(program: &str) {
    eprintln!("Usage: {} [options] <qname> <qtype>", program);
    eprintln!("Example: {} example.com. A", program);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -c, --config <file>    Configuration file (default: config.yaml)");
    eprintln!("  -s, --server <addr>    Upstream server address, e.g. 127.0.0.1:53");
    eprintln!("      --timeout-ms <n>   Overall query deadline in milliseconds");
    eprintln!("  -h, --help             Show this help");
}

#[tokio::main]
async fn main() {
    let args: Vec<String> = std::env::args().collect();

    // Parse command line arguments
    let mut config_path: Option<&str> = None;
    let mut cli_server: Option<String> = None;
    let mut cli_timeout_ms: Option<u64> = None;
    let mut positional: Vec<String> = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                i += 1;
                config_path = args.get(i).map(|s| s.as_str());
            }
            "--server" | "-s" => {
                i += 1;
                cli_server = args.get(i).cloned();
            }
            "--timeout-ms" => {
                i += 1;
                cli_timeout_ms = args.get(i).and_then(|s| s.parse().ok());
            }
            "-h" | "--help" => {
                print_usage(&args[0]);
                return;
            }
            arg if !arg.starts_with('-') => {
                positional.push(arg.to_string());
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_usage(&args[0]);
                process::exit(1);
            }
        }
        i += 1;
    }

    if positional.len() != 2 {
        print_usage(&args[0]);
        process::exit(1);
    }

    let result = run(
        config_path,
        cli_server,
        cli_timeout_ms,
        &positional[0],
        &positional[1],
    )
    .await;

    if let Err(e) = result {
        eprintln!("{}", e);
        process::exit(1);
    }
}

async fn run(
    config_path: Option<&str>,
    cli_server: Option<String>,
    cli_timeout_ms: Option<u64>,
    qname: &str,
    qtype: &str,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Load config from file; CLI arguments override it
    let mut config = load_config(config_path)?;
    if let Some(server) = cli_server {
        config.upstream = server;
    }
    if let Some(ms) = cli_timeout_ms {
        config.query_timeout_ms = ms;
    }

    init_logging(&config.logging);

    let name: Name = qname.parse()?;
    let rrtype: RecordType = qtype.parse()?;
    let question = Question::new(name, rrtype, RecordClass::IN);

    let upstream: SocketAddr = config.upstream.parse()?;
    let digger = Digger::new(upstream);

    let started = Instant::now();
    let response = digger
        .dig(question, Duration::from_millis(config.query_timeout_ms))
        .await?;
    let elapsed = started.elapsed();

    println!("{}", response.dump()?);
    println!(";; Query time: {} msec", elapsed.as_millis());
    println!(";; SERVER: {}#{}({})", upstream.ip(), upstream.port(), upstream.ip());
    println!(";; WHEN: {}", chrono::Local::now().format("%a %b %e %H:%M:%S %Y"));
    println!(";; MSG SIZE  rcvd: {}", response.packet_len());
    Ok(())
}
