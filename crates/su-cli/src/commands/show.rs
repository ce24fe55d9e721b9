use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(deck_path: &Path) -> Result<(), String> {
    let deck = super::load_deck(deck_path)?;

    if deck.is_empty() {
        println!("  Deck is empty.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Slide", "Question", "Answer", "Category", "Points", "Next"]);

    for slide in deck.slides() {
        if slide.answers.is_empty() {
            table.add_row(vec![
                slide.id.to_string(),
                slide.question.clone(),
                "—".to_string(),
                "—".to_string(),
                "—".to_string(),
                "—".to_string(),
            ]);
            continue;
        }
        for answer in &slide.answers {
            table.add_row(vec![
                slide.id.to_string(),
                slide.question.clone(),
                format!("[{}] {}", answer.id, answer.text),
                answer.category.clone(),
                answer.points.to_string(),
                answer.next.to_string(),
            ]);
        }
    }

    println!("{table}");
    println!();
    println!("  {} slides", deck.len());

    Ok(())
}
