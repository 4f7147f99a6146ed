//! CLI blackjack example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};

use twentyone::{Card, Game, GameStatus, Suit, hand_total};

fn main() {
    println!("Blackjack CLI example (type 'q' to quit)");

    let mut game = Game::new();

    loop {
        println!("\n{}", game.message());
        let bankroll = game.bankroll();
        if bankroll == 0 {
            match prompt_line("You are out of money. Reset? (y/n): ").as_str() {
                "y" | "yes" => {
                    game.reset();
                    continue;
                }
                _ => break,
            }
        }

        let Some(bet) = prompt_bet(&format!("Bet amount (1-{bankroll}, 0 to quit): ")) else {
            break;
        };
        if bet == 0 {
            println!("Goodbye.");
            break;
        }

        if !game.start_game(bet) {
            println!("{}", game.message());
            continue;
        }

        while game.status() == GameStatus::Playing {
            print_table(&game);

            println!("{}", format_actions(&game));
            match prompt_line("Action: ").as_str() {
                "h" | "hit" => game.hit(),
                "s" | "stand" => game.stand(),
                "p" | "split" => game.split(),
                "i" | "insurance" => game.insurance(),
                "q" | "quit" => return,
                _ => println!("Unknown action."),
            }
            println!("{}", game.message());
        }

        print_table(&game);
        println!("Round complete. Bankroll: {}", game.bankroll());
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_bet(prompt: &str) -> Option<u32> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<u32>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_table(game: &Game) {
    println!("\nShoe: {} cards remaining", game.cards_remaining());

    println!(
        "Dealer: {} (value {})",
        format_cards(game.dealer_hand()),
        hand_total(game.dealer_hand())
    );

    if game.split_hands().is_empty() {
        println!(
            "You: {} (value {}) | bet {}",
            format_cards(game.player_hand()),
            hand_total(game.player_hand()),
            game.bet()
        );
    } else {
        for (index, hand) in game.split_hands().iter().enumerate() {
            let marker = if game.active_split_hand() == Some(index) {
                "*"
            } else {
                " "
            };
            let result = hand
                .result()
                .map_or_else(String::new, |outcome| format!(" | {outcome}"));
            println!(
                "{} Hand {}: {} | value {} | bet {} | {:?}{}",
                marker,
                index + 1,
                format_cards(hand.cards()),
                hand.total(),
                hand.bet(),
                hand.status(),
                result
            );
        }
    }

    if game.insurance_taken() {
        println!("Insurance bet: {}", game.insurance_bet());
    }
}

fn format_actions(game: &Game) -> String {
    let mut parts = vec![
        format_action("hit", "h", true),
        format_action("stand", "s", true),
        format_action("split", "p", game.can_split()),
        format_action("insurance", "i", game.can_insure()),
    ];
    parts.push(format_action("quit", "q", true));
    format!("Actions: {}", parts.join(" "))
}

fn format_action(label: &str, key: &str, allowed: bool) -> String {
    let text = format!("[{key}]{label}");
    if allowed {
        colorize(&text, "32")
    } else {
        colorize(&text, "90")
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(no cards)".to_string();
    }
    cards
        .iter()
        .map(|card| format_card(*card))
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}
