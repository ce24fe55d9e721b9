use std::path::Path;

use su_core::AnswerId;
use su_engine::{GameSession, MemoryStore, Phase, SessionStore, persist_session};

pub fn run(
    deck_path: &Path,
    answers: &str,
    owner: &str,
    rules: Option<&Path>,
) -> Result<(), String> {
    let deck = super::load_deck(deck_path)?;
    let config = super::load_config(rules)?;

    let script: Vec<AnswerId> = answers
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<i64>()
                .map(AnswerId)
                .map_err(|_| format!("invalid answer id: \"{}\"", part.trim()))
        })
        .collect::<Result<_, _>>()?;

    let mut session = GameSession::new(deck, config, owner)
        .map_err(|e| format!("cannot start session: {e}"))?;

    for answer_id in script {
        let phase = session
            .answer(answer_id)
            .map_err(|e| format!("at slide {}: {e}", session.cursor()))?;
        if phase == Phase::NotFound {
            return Err(format!("question not found: slide {}", session.cursor()));
        }
    }

    // A script that ends mid-game still yields a record: jump to the summary.
    if session.completed().is_none() {
        session.show_summary();
    }

    let record = session
        .take_completed()
        .ok_or("session did not produce a record")?;

    let mut store = MemoryStore::new();
    persist_session(&record, &mut store);
    let lifetime = store
        .lifetime(record.owner_id.as_str())
        .map_err(|e| e.to_string())?;

    let json = serde_json::to_string_pretty(&record).map_err(|e| e.to_string())?;
    println!("{json}");
    eprintln!(
        "  lifetime: {} sale(s), {} total",
        lifetime.number_of_sales, lifetime.total_sales
    );

    Ok(())
}
