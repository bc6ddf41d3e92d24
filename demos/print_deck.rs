//! Prints every card of a fresh deck, top to bottom, one glyph per line.

use cardeck::Deck;

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let deck = Deck::new();
    for card in &deck {
        println!("{card}");
    }
}
