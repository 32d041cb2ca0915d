use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use deck_code::env::{OutputFormat, Settings};
use deck_code::logger::LoggerManager;
use deck_code::{parse_deck, Deck, LogExt};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "deck_code",
    version = env!("CARGO_PKG_VERSION"),
    about = env!("CARGO_PKG_DESCRIPTION"),
    long_about = None,
)]
struct Args {
    /// "ADC" 로 시작하는 덱 코드 (여러 개 가능)
    #[arg(required = true)]
    deck_codes: Vec<String>,

    /// 설정 파일의 output.format 을 덮어씀
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<ExitCode> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    let settings = Settings::new().context("failed to load settings")?;
    let _logger = LoggerManager::setup(&settings.logging);

    let format = args.format.unwrap_or(settings.output.format);
    let pretty = args.pretty || settings.output.pretty;

    let mut failed = 0;
    for code in &args.deck_codes {
        let result = parse_deck(code).log_ok(|deck| {
            info!(
                heroes = deck.heroes().len(),
                cards = deck.cards().len(),
                "deck decoded"
            )
        });

        match result {
            Ok(deck) => println!("{}", render(&deck, format, pretty)?),
            Err(err) => {
                failed += 1;
                eprintln!("{}: {}", code, err);
            }
        }
    }

    if failed > 0 {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn render(deck: &Deck, format: OutputFormat, pretty: bool) -> Result<String> {
    match format {
        OutputFormat::Json if pretty => {
            serde_json::to_string_pretty(deck).context("failed to serialize deck")
        }
        OutputFormat::Json => serde_json::to_string(deck).context("failed to serialize deck"),
        OutputFormat::Text => Ok(render_text(deck)),
    }
}

fn render_text(deck: &Deck) -> String {
    let mut out = String::new();
    let name = if deck.name().is_empty() {
        "(unnamed)"
    } else {
        deck.name()
    };
    out.push_str(&format!("{}\n", name));

    out.push_str(&format!("heroes ({}):\n", deck.heroes().len()));
    for hero in deck.heroes() {
        out.push_str(&format!("  {:>6}  turn {}\n", hero.id, hero.turn));
    }

    out.push_str(&format!(
        "cards ({} entries, {} total):\n",
        deck.cards().len(),
        deck.total_card_count()
    ));
    for card in deck.cards() {
        out.push_str(&format!("  {:>6}  x{}\n", card.id, card.count));
    }
    out
}
