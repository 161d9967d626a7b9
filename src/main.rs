use std::{
    io::{self, BufRead, Write},
    thread,
};

use anyhow::{Context, Result};
use boggle::{
    config::Config,
    game::{GridGenerator, Session},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const TITLE: &str = "BOGGLE";

fn main() -> Result<()> {
    // Initialize tracing; stdout belongs to the board
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "boggle=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    tracing::info!("Starting Boggle...");

    let config = Config::from_env()?;
    tracing::info!(
        "Configuration loaded: {} search, words of {}+ letters",
        config.game.search_policy,
        config.game.min_word_length
    );

    let grid = match config.game.seed {
        Some(seed) => {
            tracing::info!("Rolling board from seed {}", seed);
            GridGenerator::from_seed(seed)
        }
        None => GridGenerator::generate(),
    };
    tracing::debug!("Board: {}", serde_json::to_string(&grid)?);

    let mut session = Session::new(grid, config.session_settings());
    play(&mut session, &config, io::stdin().lock(), io::stdout().lock())?;

    tracing::info!("Game over with {} words found", session.found_count());
    Ok(())
}

/// Read guesses from `input` until it runs dry, reporting each verdict to `output`
fn play<R: BufRead, W: Write>(
    session: &mut Session,
    config: &Config,
    input: R,
    mut output: W,
) -> Result<()> {
    let mut lines = input.lines();

    loop {
        writeln!(output, "{}", TITLE)?;
        write!(output, "{}", session.grid())?;
        writeln!(output, "\nWords found: {}", session.found_count())?;
        write!(output, "Find a word: ")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            break;
        };
        let line = line.context("Failed to read guess")?;

        let outcome = session.guess(&line);
        tracing::debug!("Guess {:?}: {:?}", line.trim(), outcome);
        writeln!(output, "{}", outcome)?;
        output.flush()?;

        thread::sleep(config.console.turn_delay);
        write!(output, "{}", "\n".repeat(config.console.clear_lines))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use boggle::Grid;

    fn quick_config() -> Config {
        Config::from_lookup(|key| match key {
            "BOGGLE_TURN_DELAY_MS" | "BOGGLE_CLEAR_LINES" => Some("0".to_string()),
            _ => None,
        })
        .unwrap()
    }

    #[test]
    fn test_play_reports_each_guess() {
        let config = quick_config();
        let grid = Grid::from_rows(&["CATS", "OREW", "LINE", "MAPS"]).unwrap();
        let mut session = Session::new(grid, config.session_settings());

        let mut output = Vec::new();
        play(&mut session, &config, "cats\ncats\ncat\ncatz\n".as_bytes(), &mut output).unwrap();
        let output = String::from_utf8(output).unwrap();

        assert!(output.contains("Yes - CATS is on the board."));
        assert!(output.contains("Word already found."));
        assert!(output.contains("Word must be at least 4 letters long."));
        assert!(output.contains("No - CATZ is not on the board."));
        assert!(output.contains("Words found: 1"));
        assert_eq!(output.matches("Find a word: ").count(), 5);
        assert_eq!(session.found_words(), ["CATS"]);
    }
}
