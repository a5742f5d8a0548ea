//! Command bodies, kept free of process I/O so they can be tested.

use anyhow::{bail, Context, Result};
use std::io::{BufRead, Write};
use tracing::debug;

use mysquad_core::{LeagueCatalog, NewGameOptions, Session, SquadGenerator};

use crate::render::{render_records, TableRenderer};

pub const NO_GAME_HINT: &str = "No game in progress. Run `mysquad new` to start one.";

/// Read one trimmed, non-empty line after printing `label`.
pub fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, label: &str) -> Result<String> {
    loop {
        write!(output, "{label}: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            bail!("no input for '{label}'");
        }

        let answer = line.trim();
        if !answer.is_empty() {
            return Ok(answer.to_string());
        }
    }
}

/// Prompt until the answer names a catalog country.
pub fn prompt_country<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    catalog: &LeagueCatalog,
) -> Result<String> {
    let choices = catalog.countries_available().join(", ");
    loop {
        let answer = prompt(input, output, &format!("Country choice ({choices})"))?;
        if catalog.has_country(&answer) {
            return Ok(answer);
        }
        writeln!(output, "Error: '{answer}' is not one of {choices}.")?;
    }
}

pub fn new_game(
    name: &str,
    country: &str,
    catalog: &LeagueCatalog,
    seed: Option<u64>,
) -> Result<Session> {
    debug!(team = name, country, seeded = seed.is_some(), "starting new game");
    let mut generator = seed.map_or_else(SquadGenerator::new, SquadGenerator::with_seed);

    Session::new_game(name, country, catalog, &mut generator, &NewGameOptions::default())
        .with_context(|| format!("Failed to start a new game in '{country}'"))
}

pub fn show_team(session: &Session) -> Result<String> {
    let team = session.team().context(NO_GAME_HINT)?;
    Ok(format!("Playing with: {}.", team.name))
}

pub fn show_league(session: &Session) -> Result<String> {
    let league = session.league().context(NO_GAME_HINT)?;
    Ok(format!("Playing {} in {}.", league.name, country_title(session)))
}

pub fn show_league_details(session: &Session, renderer: &impl TableRenderer) -> Result<String> {
    let league = session.league().context(NO_GAME_HINT)?;
    Ok(format!(
        "{} in {}:\n{}",
        league.name,
        country_title(session),
        render_records(renderer, &league.current_table())
    ))
}

pub fn show_squad_details(session: &Session, renderer: &impl TableRenderer) -> Result<String> {
    let team = session.team().context(NO_GAME_HINT)?;
    Ok(format!("{}'s Squad:\n{}", team.name, render_records(renderer, &team.squad.rows())))
}

pub fn show_top_scorers(session: &Session, renderer: &impl TableRenderer) -> Result<String> {
    let league = session.league().context(NO_GAME_HINT)?;
    let table = render_records(renderer, &league.top_scorers());
    Ok(format!("{} top scorers:\n{}", league.name, table))
}

fn country_title(session: &Session) -> String {
    session.current_country().map(capitalize).unwrap_or_default()
}

/// First letter upper case, the rest lower case.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::TextTable;
    use std::io::Cursor;

    fn catalog() -> LeagueCatalog {
        LeagueCatalog::from_json_str(
            r#"{
                "england": [ { "title": "Premier League", "teams": ["Arsenal", "Chelsea", "Everton"] } ],
                "brazil": [ { "title": "Serie A", "teams": ["Santos", "Vasco"] } ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("england"), "England");
        assert_eq!(capitalize("SOUTH KOREA"), "South korea");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_prompt_skips_blank_lines() {
        let mut input = Cursor::new("\n  \nRovers\n");
        let mut output = Vec::new();

        let answer = prompt(&mut input, &mut output, "Your team's name").unwrap();
        assert_eq!(answer, "Rovers");
        assert!(String::from_utf8(output).unwrap().starts_with("Your team's name: "));
    }

    #[test]
    fn test_prompt_country_retries() {
        let mut input = Cursor::new("atlantis\nbrazil\n");
        let mut output = Vec::new();

        let country = prompt_country(&mut input, &mut output, &catalog()).unwrap();
        assert_eq!(country, "brazil");
        assert!(String::from_utf8(output).unwrap().contains("'atlantis' is not one of"));
    }

    #[test]
    fn test_prompt_eof_is_error() {
        let mut input = Cursor::new("");
        assert!(prompt(&mut input, &mut Vec::new(), "Name").is_err());
    }

    #[test]
    fn test_show_commands() {
        let session = new_game("Rovers", "england", &catalog(), Some(8)).unwrap();

        assert_eq!(show_team(&session).unwrap(), "Playing with: Rovers.");
        assert_eq!(show_league(&session).unwrap(), "Playing Premier League in England.");

        let details = show_league_details(&session, &TextTable).unwrap();
        let mut lines = details.lines();
        assert_eq!(lines.next(), Some("Premier League in England:"));
        assert!(lines.next().unwrap().trim_start().starts_with("POS"));
        assert_eq!(details.lines().count(), 1 + 2 + 3);
        assert!(details.lines().last().unwrap().contains("Rovers"));

        let squad = show_squad_details(&session, &TextTable).unwrap();
        assert!(squad.starts_with("Rovers's Squad:\n"));
        assert_eq!(squad.lines().count(), 1 + 2 + 22);
    }

    #[test]
    fn test_show_commands_without_game() {
        let session = Session::default();

        for result in [
            show_team(&session),
            show_league(&session),
            show_league_details(&session, &TextTable),
            show_squad_details(&session, &TextTable),
        ] {
            assert_eq!(result.unwrap_err().to_string(), NO_GAME_HINT);
        }
    }

    #[test]
    fn test_new_game_seed_is_reproducible() {
        let names = |session: &Session| -> Vec<String> {
            session.team().unwrap().squad.iter().map(|p| p.name().to_string()).collect()
        };

        let a = new_game("Rovers", "england", &catalog(), Some(42)).unwrap();
        let b = new_game("Rovers", "england", &catalog(), Some(42)).unwrap();
        assert_eq!(names(&a), names(&b));
    }

    #[test]
    fn test_new_game_unknown_country() {
        let err = new_game("Rovers", "atlantis", &catalog(), Some(1)).unwrap_err();
        assert!(format!("{err:#}").contains("available: brazil, england"));
    }
}
