//! poker-eval, showdown equity of hand distributions
use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use log::{debug, info};
use serde::Serialize;

use poker_enum::equity_calculator::{normalize, EquityResult, ShowdownEnumerator};
use poker_enum::hand_evaluator::{make_evaluator, CardSet, SuitDisplay};
use poker_enum::hand_range::CardDistribution;

#[derive(Debug, Parser)]
#[clap(name = "poker-eval", about = "Exact showdown equity by enumeration")]
struct Cli {
    /// Game identifier, h hold'em, O omaha, o omaha/8, s stud, e stud/8, r razz, ...
    #[clap(long, short, default_value = "h")]
    game: String,
    /// Known board cards, e.g. 2c7d9h.
    #[clap(long, short, default_value = "")]
    board: String,
    /// Cards out of play.
    #[clap(long, short, default_value = "")]
    dead: String,
    /// Worker threads.
    #[clap(long, short, default_value_t = 1)]
    threads: usize,
    /// How suits are printed in the board and seat lines.
    #[clap(long, value_enum, default_value_t = Suits::Ascii)]
    suits: Suits,
    /// Print the report as JSON.
    #[clap(long)]
    json: bool,
    /// Log enumeration details.
    #[clap(long, short)]
    verbose: bool,
    /// One distribution per seat, e.g. AsAh, KsKh,KdKc=0.5 or . for a random hand.
    #[clap(required = true)]
    hands: Vec<String>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Suits {
    Ascii,
    Unicode,
    Html,
    Ansi,
}

impl From<Suits> for SuitDisplay {
    fn from(s: Suits) -> SuitDisplay {
        match s {
            Suits::Ascii => SuitDisplay::Ascii,
            Suits::Unicode => SuitDisplay::Unicode,
            Suits::Html => SuitDisplay::Html,
            Suits::Ansi => SuitDisplay::Ansi,
        }
    }
}

#[derive(Debug, Serialize)]
struct SeatReport {
    hand: String,
    equity: f64,
    #[serde(flatten)]
    shares: EquityResult,
}

#[derive(Debug, Serialize)]
struct Report {
    game: String,
    board: CardSet,
    dead: CardSet,
    seats: Vec<SeatReport>,
}

fn parse_cards(text: &str, what: &str) -> Result<CardSet> {
    text.parse()
        .with_context(|| format!("invalid {} {:?}", what, text))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let evaluator = make_evaluator(&cli.game)?;
    let board = parse_cards(&cli.board, "board")?;
    let dead = parse_cards(&cli.dead, "dead cards")?;
    if board.intersects(dead) {
        bail!("board {} and dead cards {} overlap", board, dead);
    }

    let style = SuitDisplay::from(cli.suits);
    let mut labels = Vec::with_capacity(cli.hands.len() + 1);
    let mut dists = Vec::with_capacity(cli.hands.len() + 1);
    for text in &cli.hands {
        let dist: CardDistribution = text
            .parse()
            .with_context(|| format!("invalid hand distribution {:?}", text))?;
        labels.push(format!("The hand {}", dist.hands_string_with(style)));
        dists.push(dist);
    }
    if dists.len() == 1 {
        let mut random = CardDistribution::new();
        random.fill(evaluator.hand_size());
        labels.push("A random hand".to_string());
        dists.push(random);
    }
    debug!("{:?}", evaluator);

    let results = ShowdownEnumerator::new()
        .dead_cards(dead)
        .threads(cli.threads)
        .calculate_equity(&dists, board, evaluator.as_ref())?;
    let equities = normalize(&results);
    info!(
        "{} seats, {} total shares",
        results.len(),
        results.iter().map(EquityResult::total).sum::<f64>()
    );

    if cli.json {
        let report = Report {
            game: cli.game.clone(),
            board,
            dead,
            seats: cli
                .hands
                .iter()
                .cloned()
                .chain(std::iter::once(".".to_string()))
                .zip(results.iter().zip(equities.iter()))
                .map(|(hand, (r, &equity))| SeatReport {
                    hand,
                    equity,
                    shares: *r,
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if !board.is_empty() {
        println!("board: {}", board.to_string_with(style));
    }
    for ((label, r), equity) in labels.iter().zip(results.iter()).zip(equities.iter()) {
        println!(
            "{} has {:.4} % equity ({} {} {})",
            label,
            equity * 100.0,
            r.win_shares,
            r.tie_shares,
            r.total()
        );
    }
    Ok(())
}
