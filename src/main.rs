#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use robot_mover::{
    init_logging, print_surface, Action, ClientConfig, CommandClient, Controller, HttpTransport,
    MemorySurface, StderrNotifier, DEFAULT_BASE_URL,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use std::io::{self, BufRead, Write};
#[cfg(feature = "std")]
use tokio::time::Duration;

#[cfg(feature = "std")]
type HttpController = Controller<CommandClient<HttpTransport>, MemorySurface, StderrNotifier>;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Base URL of the simulator server.
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    url: String,
    #[arg(long, help = "Give up on a request after this many seconds (default: wait forever)")]
    timeout_secs: Option<u64>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Move the robot one cell forward.
    Move,
    /// Turn the robot 90 degrees clockwise.
    Turn,
    /// Put the robot back at its start position.
    Reset,
    /// Show the current state without changing it.
    State,
    /// Read commands from stdin: m(ove), t(urn), r(eset), q(uit).
    Interactive,
}

#[cfg(feature = "std")]
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let config = ClientConfig {
        base_url: cli.url,
        timeout: cli.timeout_secs.map(Duration::from_secs),
    };
    let client = CommandClient::new(HttpTransport::with_config(&config)?);
    let controller = Controller::bootstrap(client, StderrNotifier, MemorySurface::from_grid)
        .await
        .map_err(|e| anyhow::anyhow!("Could not load initial state from server: {}", e))?;

    match cli.command {
        Commands::Move => run_once(&controller, Action::Advance).await,
        Commands::Turn => run_once(&controller, Action::Rotate).await,
        Commands::Reset => run_once(&controller, Action::Reset).await,
        Commands::State => controller.with_surface(print_surface).await,
        Commands::Interactive => run_interactive(&controller).await?,
    }
    Ok(())
}

#[cfg(feature = "std")]
async fn run_once(controller: &HttpController, action: Action) {
    // Failures are already logged and reported by the controller.
    let _ = controller.dispatch(action).await;
    controller.with_surface(print_surface).await;
}

#[cfg(feature = "std")]
async fn run_interactive(controller: &HttpController) -> anyhow::Result<()> {
    controller.with_surface(print_surface).await;
    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let action = match line.trim().to_ascii_lowercase().as_str() {
            "m" | "move" => Action::Advance,
            "t" | "turn" => Action::Rotate,
            "r" | "reset" => Action::Reset,
            "q" | "quit" | "exit" => break,
            "" => continue,
            other => {
                println!("Unknown command '{}'. Use m, t, r or q.", other);
                continue;
            }
        };
        run_once(controller, action).await;
    }
    Ok(())
}
