use std::io::{self, BufRead, Write};
use std::sync::Arc;

use clap::{Parser, Subcommand};

use scheme_recommender::domain::profile::Profile;
use scheme_recommender::domain::scheme::Recommendations;
use scheme_recommender::errors::{RecommenderError, RecommenderResult};
use scheme_recommender::models::config::AppConfig;
use scheme_recommender::processing::embedding::FastEmbedder;
use scheme_recommender::processing::matcher::Matcher;
use scheme_recommender::processing::recommend::Recommender;
use scheme_recommender::processing::service::process_service_message;
use scheme_recommender::repository::JsonCatalog;

#[derive(Parser)]
#[command(version, about = "Government welfare scheme recommender")]
struct Cli {
    /// Path to a YAML configuration file.
    #[arg(long)]
    config: Option<String>,

    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Subcommand)]
enum Mode {
    /// Answer JSON requests on a ZMQ REP socket.
    Serve,
    /// Prompt for queries on the terminal.
    Interactive,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let cli = Cli::parse();

    let config = match AppConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    let catalog = JsonCatalog::new(&config.catalog_path);
    let interactive = !matches!(cli.mode, Some(Mode::Serve));
    if interactive && !catalog.exists() {
        eprintln!(
            "Error: '{}' not found. Generate the scheme embeddings first.",
            catalog.path().display()
        );
        std::process::exit(1);
    }

    let embedder = match FastEmbedder::new(&config.model, config.model_cache_dir.as_deref()) {
        Ok(embedder) => embedder,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    let matcher = Matcher::new(Arc::new(embedder), Arc::new(catalog));
    let recommender = Recommender::new(matcher, &config);

    let outcome = if interactive {
        run_interactive(&recommender, config.top_n).await
    } else {
        serve(&recommender, &config.service_address).await
    };

    if let Err(e) = outcome {
        log::error!("{e}");
        std::process::exit(1);
    }
}

async fn serve(recommender: &Recommender, address: &str) -> RecommenderResult<()> {
    let context = zmq::Context::new();
    let responder = context
        .socket(zmq::REP)
        .map_err(|e| RecommenderError::Config(format!("Cannot create zmq socket: {e}")))?;
    responder
        .bind(address)
        .map_err(|e| RecommenderError::Config(format!("Cannot bind to {address}: {e}")))?;

    log::info!("Scheme recommender listening on {address}");

    loop {
        let msg = match responder.recv_bytes(0) {
            Ok(msg) => msg,
            Err(e) => {
                log::error!("Failed to receive request: {e}");
                continue;
            }
        };

        let reply = process_service_message(&msg, recommender).await;
        if let Err(e) = responder.send(reply.to_string().as_bytes(), 0) {
            log::error!("Failed to send reply: {e}");
        }
    }
}

fn prompt(lines: &mut impl Iterator<Item = io::Result<String>>, label: &str) -> Option<String> {
    print!("{label}");
    io::stdout().flush().ok();
    match lines.next()? {
        Ok(line) => Some(line.trim().to_string()),
        Err(e) => {
            log::error!("Failed to read input: {e}");
            None
        }
    }
}

async fn run_interactive(recommender: &Recommender, top_n: usize) -> RecommenderResult<()> {
    println!("Government Scheme Recommender Ready!");
    println!(
        "Enter 'profile' for personalized recommendations, or a direct query. Type 'quit' to exit.\n"
    );

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while let Some(input) = prompt(&mut lines, "Your input: ") {
        if input.eq_ignore_ascii_case("quit") {
            println!("Exiting...");
            break;
        }

        let outcome = if input.eq_ignore_ascii_case("profile") {
            let Some(profile) = read_profile(&mut lines) else {
                break;
            };
            recommender.recommend_profile(profile).await
        } else {
            recommender.recommend_query(&input).await
        };

        match outcome {
            Ok(reply) => print_recommendations(&reply, top_n),
            Err(e) => println!("Request failed: {e}"),
        }

        println!("\n{}\n", "-".repeat(80));
    }

    Ok(())
}

fn read_profile(lines: &mut impl Iterator<Item = io::Result<String>>) -> Option<Profile> {
    let name = prompt(&mut *lines, "Enter your name: ")?;
    let mut ask = |label: &str| prompt(&mut *lines, label).map(|value| value.to_lowercase());

    let profile = Profile {
        name,
        age_group: ask(
            "Enter age group (e.g., 'student' for 18-25, 'young adult' for 25-35, 'adult' for 35+): ",
        )?,
        gender: ask("Enter gender (e.g., 'female', 'male', 'other'): ")?,
        occupation: ask("Enter occupation/sector (e.g., 'student', 'farmer', 'employed'): ")?,
        income_level: ask("Enter income level (e.g., 'low', 'middle', 'high'): ")?,
        state: ask("Enter state (e.g., 'tamil nadu'): ")?,
        custom_state: String::new(),
    };
    println!("Profile saved: {profile:?}");
    Some(profile)
}

fn print_recommendations(reply: &Recommendations, top_n: usize) {
    if reply.recommendations.is_empty() {
        println!("No recommendations found: {}", reply.message);
        return;
    }

    println!("\nTop {top_n} Personalized Recommendations for: '{}'\n", reply.query);
    println!("{:<20} {:<60} {:>10}", "state", "scheme_name", "similarity");
    for item in &reply.recommendations {
        println!("{:<20} {:<60} {:>10.4}", item.state, item.scheme_name, item.similarity);
    }
    println!("\n{}", reply.message);
}
