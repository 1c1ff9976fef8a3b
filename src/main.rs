mod app;
mod cli;
mod error;
mod logging;
mod models;
mod progress;
mod source;
mod theme;
mod ui;

use std::io::{self, stdout};
use std::time::Duration;

use crossterm::{
    event::{self, Event},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;

use crate::app::App;
use crate::models::Roadmap;

fn main() -> io::Result<()> {
    let config = cli::parse_args();
    logging::init(config.verbose, config.log_file.clone());

    let (roadmap, source) =
        source::find_roadmap(config.roadmap.as_deref()).map_err(io::Error::other)?;

    if config.dump {
        print_summary(&roadmap);
        return Ok(());
    }

    let mut app = App::new(roadmap, source, &config);

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    // Run the app
    let result = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "event loop failed");
    }
    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| ui::render(frame, app))?;

        // Handle input; resize events just fall through to the next draw
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }
    }

    tracing::info!(completed = app.completed_count(), "exiting");
    Ok(())
}

/// Plain-text listing of the roadmap for `--dump`
fn print_summary(roadmap: &Roadmap) {
    println!("{}", roadmap.title);
    if !roadmap.subtitle.is_empty() {
        println!("{}", roadmap.subtitle);
    }
    for phase in &roadmap.phases {
        println!();
        println!("Phase {}: {} ({})", phase.id, phase.title, phase.duration);
        println!("  {}", phase.focus);
        for (range, month) in &phase.months {
            println!(
                "  Months {}: {} [{} items]",
                range,
                month.title,
                month.item_count()
            );
            for skill in &month.skills {
                println!("    - {} ({})", skill.name, skill.topics.join(", "));
            }
            for project in &month.projects {
                println!("    * {} [{}]", project.name, project.complexity.label());
            }
        }
    }
}
