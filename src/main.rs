use clap::Parser;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use env_logger::Env;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::fs::File;
use std::path::PathBuf;

use cybersim::game_mode::load_game_mode;
use cybersim::network::NetworkRecord;

/// Network model and game-mode validation for cyber attack/defense training simulations
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the game mode YAML file (nested or legacy flattened format)
    #[arg(short, long)]
    game_mode: PathBuf,

    /// Path to the network record YAML file
    #[arg(short, long)]
    network: PathBuf,

    /// Seed for the randomized reset operations
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Output directory for the resolved network and game mode
    #[arg(short, long, default_value = "sim_output")]
    output: PathBuf,
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Parse command-line arguments
    let args = Args::parse();

    // Initialize logging with default filter level of "info"
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    info!("Starting cybersim episode setup");
    info!("Game mode file: {:?}", args.game_mode);
    info!("Network file: {:?}", args.network);
    info!("Seed: {}", args.seed);

    // Validate the game mode before touching the network
    let game_mode = load_game_mode(&args.game_mode)?;

    // Load the network record and instantiate it, enforcing structural
    // invariants on the way in
    info!("Loading network record from: {:?}", args.network);
    let file = File::open(&args.network)
        .wrap_err_with(|| format!("Failed to open network file '{}'", args.network.display()))?;
    let record: NetworkRecord = serde_yaml::from_reader(file)
        .wrap_err_with(|| format!("Failed to parse network file '{}'", args.network.display()))?;
    let name = record.name.clone();
    let mut network = record
        .into_network()
        .wrap_err("Network record violates structural invariants")?;

    // Randomize roles and vulnerabilities reproducibly from the seed
    let mut rng = StdRng::seed_from_u64(args.seed);
    network
        .reset(&mut rng)
        .wrap_err("Randomized network reset failed")?;
    network.set_node_positions();

    info!(
        "Network ready: {} nodes, {} entry, {} high-value",
        network.node_count(),
        network.entry_nodes().count(),
        network.high_value_nodes().count()
    );

    // Write the resolved episode inputs for the training harness
    fs::create_dir_all(&args.output)
        .wrap_err_with(|| format!("Failed to create output directory '{}'", args.output.display()))?;

    let network_path = args.output.join("network.json");
    let resolved = NetworkRecord::from_network(&network, name);
    let out = File::create(&network_path)
        .wrap_err_with(|| format!("Failed to create '{}'", network_path.display()))?;
    serde_json::to_writer_pretty(out, &resolved)
        .wrap_err("Failed to serialize resolved network")?;
    info!("Wrote resolved network: {network_path:?}");

    let game_mode_path = args.output.join("game_mode.json");
    let out = File::create(&game_mode_path)
        .wrap_err_with(|| format!("Failed to create '{}'", game_mode_path.display()))?;
    serde_json::to_writer_pretty(out, &game_mode)
        .wrap_err("Failed to serialize validated game mode")?;
    info!("Wrote validated game mode: {game_mode_path:?}");

    info!("Episode setup completed successfully");
    Ok(())
}
