use crate::bounty::Bounties;
use crate::chips::Allocation;
use crate::chips::Table;
use crate::ledger::Ledger;
use crate::pickem::Rotation;
use crate::tournament::Clock;
use crate::tournament::Tournament;
use colored::Colorize;

pub fn allocation(allocation: &Allocation) -> String {
    let table = Table::from(allocation);
    let mut lines = vec![
        format!(
            "{} {}  ({} chips, {} per player)",
            "per player".bold(),
            allocation,
            allocation.chips(),
            allocation.value()
        ),
        String::new(),
    ];
    let mut rows = table.to_string().lines().map(String::from).collect::<Vec<_>>();
    if let Some(header) = rows.first_mut() {
        *header = header.bold().to_string();
    }
    lines.extend(rows);
    lines.join("\n")
}

pub fn tournament(tournament: &Tournament) -> String {
    format!(
        "{}\n{} chips in play, {} total minutes",
        tournament.to_string().bold(),
        tournament.chips(),
        tournament.structure().minutes()
    )
}

pub fn clock(clock: &Clock) -> String {
    let state = match (clock.finished(), clock.running()) {
        (true, _) => "finished".red(),
        (false, true) => "running".green(),
        (false, false) => "paused".yellow(),
    };
    let mut lines = vec![format!("{}  {}", clock.display().bold(), state)];
    for (i, level) in clock.schedule().iter().enumerate() {
        lines.push(match i {
            0 => format!("> {}", level).cyan().to_string(),
            _ => format!("  {}", level).dimmed().to_string(),
        });
    }
    lines.join("\n")
}

pub fn ticker(clock: &Clock) -> String {
    match clock.current() {
        Some(level) => format!(
            "\rLevel {} {}/{} ante {}  {}  ",
            level.index(),
            level.small(),
            level.big(),
            level.ante(),
            clock.display().bold()
        ),
        None => format!("\r{}  ", clock.display()),
    }
}

pub fn bounties(bounties: &Bounties) -> String {
    match bounties.is_empty() {
        true => "bounty pool is empty".dimmed().to_string(),
        false => format!(
            "{} left worth {}: {}",
            bounties.len(),
            bounties.total(),
            bounties
        ),
    }
}

pub fn rotation(rotation: &Rotation) -> String {
    let game = rotation.current();
    format!(
        "{}  (hand {} of {}, then {})\n{}",
        game.to_string().bold().green(),
        rotation.hands() + 1,
        rotation.orbit(),
        rotation.upcoming(),
        game.rules()
    )
}

pub fn games(rotation: &Rotation) -> String {
    rotation
        .games()
        .iter()
        .enumerate()
        .map(|(i, game)| match *game == rotation.current() {
            true => format!("{:>2}. {}", i + 1, game).green().to_string(),
            false => format!("{:>2}. {}", i + 1, game),
        })
        .collect::<Vec<String>>()
        .join("\n")
}

pub fn ledger(ledger: &Ledger) -> String {
    if ledger.is_empty() {
        return "no sessions recorded".dimmed().to_string();
    }
    let mut lines = ledger
        .sessions()
        .iter()
        .enumerate()
        .map(|(i, session)| {
            let line = format!("{:>3}. {}", i + 1, session);
            match session.net() {
                n if n > 0 => line.green().to_string(),
                n if n < 0 => line.red().to_string(),
                _ => line,
            }
        })
        .collect::<Vec<String>>();
    lines.push(format!("{} {}", "total".bold(), ledger.totals()));
    lines.join("\n")
}
