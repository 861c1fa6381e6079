#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use chaser_client::{
    init_logging, ChaserError, ClientConfig, ConsoleObserver, ErrorKind, LogObserver, Player,
    RandomWalker, TcpConnection, TurnObserver, TurnSequencer,
};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::io::{self, BufRead, Write};
#[cfg(feature = "std")]
use std::net::IpAddr;
#[cfg(feature = "std")]
use std::time::Duration;

/// Sample CHaser client: connects, then plays with a random walker until
/// the server ends the game.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Server IP address. Prompted for when omitted.
    #[arg(long)]
    host: Option<IpAddr>,
    /// Server port. Prompted for when omitted.
    #[arg(long)]
    port: Option<u16>,
    /// Display name sent to the server. Prompted for when omitted.
    #[arg(long)]
    name: Option<String>,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    /// Seconds to wait for the server before giving up on a reply.
    #[arg(long, default_value_t = 30)]
    read_timeout: u64,
    /// Log turns instead of drawing them.
    #[arg(long)]
    quiet: bool,
    /// Stop after this many failed connection attempts instead of asking.
    #[arg(long)]
    retries: Option<u32>,
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let stdin = io::stdin();
    let mut input = stdin.lock();

    let host = match cli.host {
        Some(host) => {
            println!("Server IP address: {}", host);
            host
        }
        None => prompt(&mut input, "Server IP address: ", |s| s.parse::<IpAddr>().ok())?,
    };
    let port = match cli.port {
        Some(port) => {
            println!("Port: {}", port);
            port
        }
        None => prompt(&mut input, "Port: ", |s| s.parse::<u16>().ok())?,
    };
    let name = match cli.name {
        Some(name) => {
            println!("Display name: {}\n", name);
            name
        }
        None => prompt(&mut input, "Display name: ", |s| {
            (!s.is_empty()).then(|| s.to_string())
        })?,
    };

    let config = ClientConfig::new(host.to_string(), port, name)
        .with_read_timeout(Duration::from_secs(cli.read_timeout))
        .with_log_turns(!cli.quiet);

    let connection = connect_with_retry(&config, cli.retries, &mut input).await?;

    let observer: Box<dyn TurnObserver> = if config.log_turns {
        Box::new(ConsoleObserver)
    } else {
        Box::new(LogObserver)
    };
    let mut sequencer = TurnSequencer::with_observer(connection, observer);

    let mut rng = if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (moves will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };
    let mut player = RandomWalker::new();

    let outcome = play(&mut sequencer, &mut player, &mut rng).await;
    sequencer.close().await;

    match outcome {
        Err(e) if e.kind() == ErrorKind::GameFinished => {
            println!("{}", e);
            Ok(())
        }
        Err(e) => Err(e.into()),
        Ok(()) => Ok(()),
    }
}

/// Run turns until the sequencer reports an error. A finished game arrives
/// as [`ChaserError::GameFinished`].
#[cfg(feature = "std")]
async fn play(
    sequencer: &mut TurnSequencer<TcpConnection>,
    player: &mut dyn Player,
    rng: &mut SmallRng,
) -> Result<(), ChaserError> {
    loop {
        let mut controller = sequencer.controller();
        let surroundings = controller.get_ready().await?;
        let order = player.next_order(rng, &surroundings);
        sequencer.issue(order).await?;
    }
}

#[cfg(feature = "std")]
async fn connect_with_retry(
    config: &ClientConfig,
    retries: Option<u32>,
    input: &mut impl BufRead,
) -> anyhow::Result<TcpConnection> {
    let mut attempts = 0u32;
    loop {
        match TcpConnection::connect_with(config).await {
            Ok(connection) => {
                println!("Connection completed.\nPlease wait for the game to start...\n");
                return Ok(connection);
            }
            Err(e) => {
                attempts += 1;
                eprintln!("Failed to connect to the CHaser server: {}", e);
                match retries {
                    Some(max) if attempts >= max => return Err(e.into()),
                    Some(_) => tokio::time::sleep(Duration::from_secs(1)).await,
                    None => {
                        println!("(Press \"Enter\" to retry)");
                        let mut line = String::new();
                        if input.read_line(&mut line)? == 0 {
                            return Err(e.into());
                        }
                    }
                }
            }
        }
    }
}

/// Ask until `parse` accepts the trimmed line.
#[cfg(feature = "std")]
fn prompt<T>(
    input: &mut impl BufRead,
    label: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> anyhow::Result<T> {
    loop {
        print!("{}", label);
        io::stdout().flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(anyhow::anyhow!("stdin closed while reading {:?}", label.trim()));
        }
        if let Some(value) = parse(line.trim()) {
            return Ok(value);
        }
    }
}
