use std::path::Path;

use su_core::SlideId;

pub fn run(deck_path: &Path, entry: i64) -> Result<(), String> {
    let deck = super::load_deck(deck_path)?;
    deck.validate_entry(SlideId(entry))
        .map_err(|e| e.to_string())?;

    let report = deck.report();
    println!("  Deck OK: {} slides, {} answers", report.slide_count, report.answer_count);

    if !report.dangling.is_empty() {
        println!("  {} dangling pointer(s):", report.dangling.len());
        for (slide, answer, target) in &report.dangling {
            println!("    slide {slide}, answer {answer} -> missing slide {target}");
        }
    }

    Ok(())
}
