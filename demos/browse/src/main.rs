use std::io::{self, BufRead, Write};
use std::time::Duration;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use storefront_sdk::config::DEFAULT_BASE_URL;
use storefront_sdk::{
    CatalogClient, DetailPresenter, ListController, ListPhase, Navigator, Route, StorefrontSdk,
};
use tracing::{info, warn};

#[derive(Debug, Parser)]
#[command(author, version, about = "Browse the product catalog from the terminal")]
struct Args {
    /// Catalog API base URL
    #[arg(long, env = "STOREFRONT_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// HTTP request timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the visible window, revealing `reveals` more pages first
    List {
        #[arg(long, default_value_t = 0)]
        reveals: usize,
    },
    /// Print the detail view of one product
    Show { id: i64 },
    /// Interactive session: more / open <row> / back / refresh / quit
    Browse,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();

    let args = Args::parse();
    let sdk = StorefrontSdk::builder()
        .base_url(args.base_url)
        .timeout(Duration::from_secs(args.timeout_secs))
        .build()?;
    info!("{}", sdk);

    match args.command.unwrap_or(Command::Browse) {
        Command::List { reveals } => {
            let mut list = sdk.list_controller();
            list.load()?;
            for _ in 0..reveals {
                list.reveal_more();
            }
            print_list(&list);
        }
        Command::Show { id } => {
            let product = sdk.product(id)?;
            println!("{}", DetailPresenter::render(&product));
        }
        Command::Browse => browse(&sdk)?,
    }
    Ok(())
}

fn print_list(list: &ListController<CatalogClient>) {
    for (row, card) in list.cards().iter().enumerate() {
        println!("{:>3}. {}", row, card);
    }
    if list.has_more() {
        println!("  ... (more)");
    }
}

fn browse(sdk: &StorefrontSdk) -> Result<()> {
    let mut list = sdk.list_controller();
    let mut nav = Navigator::new();

    println!("Loading products...");
    let mut loaded = list.load();
    while let Err(e) = loaded {
        if !e.is_fetch() || !prompt_retry(&e.to_string())? {
            bail!(e);
        }
        loaded = list.retry();
    }
    print_list(&list);

    let stdin = io::stdin();
    prompt()?;
    for line in stdin.lock().lines() {
        let line = line?;
        let mut words = line.split_whitespace();
        match (words.next(), words.next()) {
            (Some("more"), _) => {
                list.reveal_more();
                print_list(&list);
            }
            (Some("open"), Some(row)) => match row.parse::<usize>() {
                Ok(row) => match list.open(row) {
                    Ok(route) => {
                        if let Route::ProductDetail { product } = &route {
                            println!("{}", DetailPresenter::render(product));
                        }
                        nav.navigate(route);
                    }
                    Err(e) => println!("{}", e),
                },
                Err(_) => println!("usage: open <row>"),
            },
            (Some("back"), _) => {
                if nav.back() {
                    print_list(&list);
                }
            }
            (Some("refresh"), _) => {
                if let Err(e) = list.refresh() {
                    warn!(error = %e, "refresh failed, keeping current list");
                }
                print_list(&list);
            }
            (Some("quit"), _) | (Some("q"), _) => break,
            (None, _) => {}
            _ => println!("commands: more | open <row> | back | refresh | quit"),
        }
        if let ListPhase::Failed { message } = list.state().phase() {
            println!("error: {}", message);
        }
        prompt()?;
    }
    Ok(())
}

fn prompt() -> Result<()> {
    print!("> ");
    io::stdout().flush()?;
    Ok(())
}

fn prompt_retry(message: &str) -> Result<bool> {
    println!("Could not load products: {}", message);
    print!("Retry? [y/N] ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}
