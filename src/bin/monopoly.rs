//! Random-turn simulator: seats the given tokens, lets random agents play and
//! prints the standings before and after.

use anyhow::{Context, Result};
use clap::Parser;
use monopoly_rs::agents::AgentTable;
use monopoly_rs::game::Game;
use monopoly_rs::lang::{format_currency, translate, Label, StringTable};
use monopoly_rs::rules::Rules;
use monopoly_rs::token::Token;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "monopoly")]
#[command(about = "Play random Monopoly turns and print the standings", long_about = None)]
#[command(version)]
struct Cli {
    /// Comma-separated tokens in seating order
    #[arg(long, value_delimiter = ',', default_value = "cat,dog")]
    tokens: Vec<Token>,

    /// Turns to play
    #[arg(long, default_value_t = 40)]
    turns: usize,

    /// Seed for the starting player, dice and agents
    #[arg(long)]
    seed: Option<u64>,

    /// TOML file overriding the default rules
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Language of the summary (en, de)
    #[arg(long, default_value = "en")]
    lang: String,

    /// Chance that an agent buys a property it can afford
    #[arg(long, default_value_t = 1.0)]
    buy_probability: f64,
}

fn print_standings(game: &Game, strings: &StringTable, lang: &str) {
    for player in game.players() {
        let account = player.snapshot();
        let token = player.token().label(strings, lang);
        let cash = format_currency(strings, lang, account.money());
        let field = account.position().label(strings, lang);
        println!(
            "{}",
            translate(
                strings,
                lang,
                "monopoly.summary.player",
                &[("token", token.as_str()), ("cash", cash.as_str()), ("field", field.as_str())]
            )
        );
        for (property, state) in account.inventory() {
            let property = property.label(strings, lang);
            let state = state.label(strings, lang);
            println!(
                "{}",
                translate(
                    strings,
                    lang,
                    "monopoly.summary.property",
                    &[("property", property.as_str()), ("state", state.as_str())]
                )
            );
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let rules = match &cli.rules {
        Some(path) => {
            Rules::load(path).with_context(|| format!("loading rules from {}", path.display()))?
        }
        None => Rules::default(),
    };
    let strings = StringTable::builtin()?;
    let lang = cli.lang.as_str();

    let mut game = match cli.seed {
        Some(seed) => Game::seeded(&cli.tokens, rules, seed)?,
        None => Game::new(&cli.tokens, rules)?,
    };
    info!(
        version = monopoly_rs::VERSION,
        players = cli.tokens.len(),
        turns = cli.turns,
        "starting simulation"
    );

    println!("{}", translate(&strings, lang, "monopoly.summary.roster", &[]));
    print_standings(&game, &strings, lang);

    let mut table = AgentTable::random(game.players().len(), cli.seed, cli.buy_probability);
    let played = table.play_turns(&mut game, cli.turns)?;
    info!(played, "simulation finished");

    let turns = played.to_string();
    println!();
    let after = translate(&strings, lang, "monopoly.summary.after", &[("turns", turns.as_str())]);
    println!("{after}");
    print_standings(&game, &strings, lang);
    Ok(())
}
