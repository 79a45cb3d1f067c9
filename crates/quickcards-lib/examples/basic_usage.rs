use quickcards_estimator::prelude::*;
use quickcards_estimator::render::{format_money, render_deck_html};
use quickcards_estimator::{DeckLoader, DECK_SIZE_OPTIONS};
use std::env;

fn demo_decks() -> Vec<Deck> {
    vec![
        Deck::new("World War II", 10).with_shuffle(true).with_cards(vec![
            Card::new("Allied Powers", "US, UK, USSR and allies against Axis."),
            Card::new("Axis Powers", "Germany, Italy, Japan alliance."),
            Card::new("D-Day", "Allied invasion of Normandy, June 6, 1944."),
        ]),
        Deck::new("Cell Parts", 20)
            .with_definitions_first(true)
            .with_cards(vec![
                Card::new("Mitochondria", "ATP production via cellular respiration."),
                Card::new("Ribosome", "Builds proteins from amino acids."),
                Card::new("Golgi", "Modifies and packages proteins/lipids."),
            ]),
    ]
}

fn main() -> Result<()> {
    let estimator = Estimator::new();
    let args: Vec<String> = env::args().collect();

    // Check if a deck file was provided
    let decks = if args.len() >= 2 {
        println!("Loading decks from: {}", args[1]);
        DeckLoader::new().load_from_file(&args[1])?
    } else {
        demo_decks()
    };

    println!("Loaded {} decks", decks.len());

    for deck in &decks {
        let estimate = estimator.estimate(&deck.to_request());

        println!("\n--- {} ---", deck.topic());
        if estimate.is_empty() {
            println!("Nothing to estimate.");
            continue;
        }

        println!("{}", render_summary(deck.topic(), &estimate));
        println!("\nYour Study Sessions:");
        for line in render_session_lines(&estimate) {
            println!("  {}", line);
        }
    }

    println!("\n--- Price by Deck Size ---");
    for size in DECK_SIZE_OPTIONS {
        for shuffle in [false, true] {
            let estimate = estimator.estimate(&DeckRequest::new("Sample", size, shuffle));
            println!(
                "{:>2} cards, shuffle {:<3}: ~{:>2} min, subtotal {}, total {}",
                size,
                if shuffle { "on" } else { "off" },
                estimate.study_minutes(),
                format_money(estimate.subtotal()),
                format_money(estimate.total())
            );
        }
    }

    println!("\n--- Deck Model Demo (HTML) ---");
    for deck in &decks {
        let estimate = estimator.estimate(&deck.to_request());
        println!("{}", render_deck_html(deck, &estimate));
    }

    Ok(())
}
