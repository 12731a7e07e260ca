//! CLI example: play one game against three bots in the terminal.
//!
//! Set `RUST_LOG=lowcard=debug` to see round-by-round logs.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use lowcard::{Card, Game, GameEvent, GameMode, GameOptions, GameState, HUMAN, Outcome, Suit};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Simulated frame length in seconds.
const FRAME: f64 = 0.25;

fn main() {
    initialize_logging();
    println!("Lowest card loses. Type a rank to play it, 'quit' to leave.");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = match Game::new(GameOptions::default(), seed) {
        Ok(game) => game,
        Err(err) => {
            println!("Options error: {err}");
            return;
        }
    };
    game.tick(0.0);

    while game.state() != GameState::Over {
        print_events(&mut game);

        if game.state() == GameState::WaitingForSubmission {
            print_table(&game);
            let input = prompt_line("Card: ");
            if input == "quit" || input == "exit" {
                println!("Goodbye.");
                return;
            }

            match parse_rank(&input) {
                Some(rank) => {
                    let card = Card::new(Suit::ALL[HUMAN], rank);
                    if let Err(err) = game.select_card(card).and_then(|()| game.submit()) {
                        println!("Cannot play that: {err}");
                        continue;
                    }
                }
                None => {
                    println!("Enter a rank: A, 2-10, J, Q or K.");
                    continue;
                }
            }
        }

        game.tick(FRAME);
    }

    print_events(&mut game);
}

fn initialize_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false).compact())
        .with(filter)
        .init();
}

fn print_events(game: &mut Game) {
    for event in game.drain_events() {
        match event {
            GameEvent::CardsRevealed { cards } => {
                let shown: Vec<String> = cards
                    .iter()
                    .map(|(hand, card)| format!("{}: {}", seat_name(*hand), format_card(card)))
                    .collect();
                println!("Revealed  {}", shown.join(" | "));
            }
            GameEvent::RoundResolved(resolution) => {
                if resolution.mercy {
                    println!("Everyone matched. Nobody is hurt.");
                } else {
                    let losers: Vec<&str> =
                        resolution.losers.iter().map(|&hand| seat_name(hand)).collect();
                    println!("Losing    {}", losers.join(", "));
                }
            }
            GameEvent::HpChanged { hand, hp } => {
                println!("{} has {} hit point(s) left.", seat_name(hand), hp);
            }
            GameEvent::TurnAdvanced { turn, mode } => {
                let label = match mode {
                    GameMode::Normal => "",
                    GameMode::SuddenDeath => " (sudden death)",
                };
                println!("\n-- Turn {turn}{label} --");
            }
            GameEvent::HandsRefilled => println!("Hands refilled."),
            GameEvent::GameOver(outcome) => {
                let text = match outcome {
                    Outcome::Win => "You win!",
                    Outcome::Lose => "You lose.",
                    Outcome::Draw => "Draw.",
                };
                println!("{text}");
            }
            GameEvent::HandChanged { .. }
            | GameEvent::RoundTimerTick { .. }
            | GameEvent::Paused
            | GameEvent::Resumed => {}
        }
    }
}

fn print_table(game: &Game) {
    for (index, hand) in game.hands().iter().enumerate() {
        let cards = if index == HUMAN {
            hand.cards().iter().map(format_card).collect::<Vec<_>>().join(" ")
        } else {
            format!("{} card(s)", hand.len())
        };
        println!(
            "{:<6} {} | {}",
            seat_name(index),
            hearts(hand.hp(), hand.max_hp()),
            cards
        );
    }
}

fn hearts(hp: u8, max_hp: u8) -> String {
    let full = colorize(&"♥".repeat(hp as usize), "31");
    let empty = colorize(&"♥".repeat(max_hp.saturating_sub(hp) as usize), "90");
    format!("{empty}{full}")
}

fn seat_name(hand: usize) -> &'static str {
    match hand {
        HUMAN => "You",
        1 => "Bot 1",
        2 => "Bot 2",
        _ => "Bot 3",
    }
}

fn parse_rank(input: &str) -> Option<u8> {
    match input {
        "a" => Some(1),
        "j" => Some(11),
        "q" => Some(12),
        "k" => Some(13),
        _ => input.parse().ok().filter(|rank| (2..=10).contains(rank)),
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => return "quit".to_string(),
        Ok(_) => {}
    }
    input.trim().to_lowercase()
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let rank = match card.rank {
        1 => "A".to_string(),
        11 => "J".to_string(),
        12 => "Q".to_string(),
        13 => "K".to_string(),
        _ => card.rank.to_string(),
    };

    colorize(&format!("{rank}{suit}"), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
