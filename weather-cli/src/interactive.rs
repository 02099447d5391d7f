//! Line-driven mode. Lookups run in the background so the prompt stays
//! usable; a newer lookup always wins over an older one still in flight.

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;
use weather_core::{Session, WidgetState};

#[derive(Debug, PartialEq, Eq)]
enum Action {
    Lookup(String),
    ToggleUnit,
    Quit,
}

impl Action {
    fn parse(line: &str) -> Self {
        match line.trim() {
            ":q" | ":quit" => Action::Quit,
            ":u" | ":unit" => Action::ToggleUnit,
            city => Action::Lookup(city.to_string()),
        }
    }
}

pub async fn run(mut session: Session) -> Result<()> {
    print_help(session.state());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    debug!("input closed");
                    if let Some(remaining) = drain(&mut session).await {
                        print_lines(&remaining);
                    }
                    break;
                };

                match Action::parse(&line) {
                    Action::Quit => break,
                    Action::ToggleUnit => {
                        session.toggle_unit();
                        print_help(session.state());
                        print_view(session.state());
                    }
                    Action::Lookup(city) => {
                        if session.request(&city) {
                            println!("Fetching weather for {city}...");
                        } else {
                            print_view(session.state());
                        }
                    }
                }
            }
            applied = session.next_outcome() => {
                if applied {
                    print_view(session.state());
                }
            }
        }
    }

    Ok(())
}

fn print_help(state: &WidgetState) {
    println!(
        "Enter a city (e.g. London,GB). `:u` {}, `:q` quits.",
        state.unit().toggle_label().to_lowercase()
    );
}

/// Once input has ended, wait for the lookup still in flight and return
/// what it settled to. `None` if nothing was outstanding.
async fn drain(session: &mut Session) -> Option<Vec<String>> {
    if !session.state().is_pending() {
        return None;
    }
    Some(session.settle().await.view().lines())
}

fn print_view(state: &WidgetState) {
    print_lines(&state.view().lines());
}

fn print_lines(lines: &[String]) {
    if lines.is_empty() {
        return;
    }
    println!();
    for line in lines {
        println!("  {line}");
    }
    println!();
}
