use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::Instant;

use colored::Colorize;

use su_core::AnswerId;
use su_engine::{GameSession, MemoryStore, Phase, persist_session};

pub fn run(deck_path: &Path, owner: &str, rules: Option<&Path>) -> Result<(), String> {
    let deck = super::load_deck(deck_path)?;
    let config = super::load_config(rules)?;

    let mut session = GameSession::new(deck, config, owner)
        .map_err(|e| format!("cannot start session: {e}"))?;
    let mut store = MemoryStore::new();

    println!("  {} Sales-Up session for {owner}", "Starting".bold());
    println!("  Answer with a number; 'summary', 'close', 'restart', 'quit'.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();
    let mut last_prompt = Instant::now();

    loop {
        render(&session);
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        // Feed wall-clock seconds since the last prompt to the countdown.
        let elapsed = last_prompt.elapsed().as_secs();
        last_prompt = Instant::now();
        for _ in 0..elapsed {
            session.tick();
        }
        if session.time_up() {
            println!("{}", "Time is up!".red().bold());
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match input.to_lowercase().as_str() {
            "quit" | "q" => break,
            "restart" => {
                session.restart();
                continue;
            }
            "summary" => {
                session.show_summary();
            }
            "close" => {
                session.close_day();
            }
            other => match other.parse::<i64>() {
                Ok(id) => {
                    if let Err(e) = session.answer(AnswerId(id)) {
                        println!("{}\n", e.to_string().yellow());
                    }
                }
                Err(_) => {
                    println!("{}\n", format!("unknown input: {input}").yellow());
                }
            },
        }

        if let Some(record) = session.take_completed() {
            persist_session(&record, &mut store);
            println!("  Session recorded: {}\n", record.rating.bold());
        }
    }

    Ok(())
}

fn render(session: &GameSession) {
    match session.phase() {
        Phase::AwaitingAnswer => {
            let slide = session.current_slide().expect("answerable slide exists");
            println!(
                "[slide {} | {} s left]",
                slide.id,
                session.remaining_time()
            );
            println!("{}", slide.question.bold());
            for answer in &slide.answers {
                println!("  [{}] {}", answer.id, answer.text);
            }
        }
        Phase::PassThrough => {
            let slide = session.current_slide().expect("slide exists");
            println!("{}", slide.question);
            println!("  (summary / close / restart)");
        }
        Phase::Summary => {
            let score = session.score();
            println!("{}", "Final score".bold());
            println!("  greeting:   {}", score.greeting);
            println!("  proposal:   {}", score.proposal);
            println!("  closing:    {}", score.closing);
            println!("  csus:       {}", score.csus);
            println!("  calificare: {}", score.calificare);
            println!("  total:      {}", score.total);
            if let Some(duration) = session.duration_seconds() {
                println!("  time: {:02}:{:02}", duration / 60, duration % 60);
            }
            println!("  (close / restart)");
        }
        Phase::Closing => {
            println!("{}", "Day closed.".bold());
            println!(
                "  {} sale(s), {} total",
                session.sales_count(),
                session.sale_total()
            );
            println!("  (restart)");
        }
        Phase::NotFound => {
            println!("{}", "Question not found.".red());
            println!("  (restart)");
        }
    }
}
