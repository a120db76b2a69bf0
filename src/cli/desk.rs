use super::query::*;
use super::render;
use crate::Chips;
use crate::MIN_DEPTH;
use crate::bounty::Bounties;
use crate::chips::allocate;
use crate::config::Config;
use crate::ledger::Ledger;
use crate::ledger::Session;
use crate::pickem::Game;
use crate::pickem::Rotation;
use crate::tournament::*;
use anyhow::Context;
use anyhow::anyhow;
use chrono::NaiveDate;
use clap::Parser;
use colored::Colorize;
use dialoguer::Input;
use dialoguer::Select;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::io::Write;
use std::time::Duration;
use std::time::Instant;

/// Everything on the tournament director's desk for one night.
pub struct CLI {
    config: Config,
    tournament: Option<Tournament>,
    clock: Option<Clock>,
    bounties: Bounties,
    rotation: Rotation,
    ledger: Ledger,
    rng: SmallRng,
}

impl CLI {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let ledger = Ledger::load(config.ledger())?;
        Ok(Self {
            config,
            tournament: None,
            clock: None,
            bounties: Bounties::new(),
            rotation: Rotation::default(),
            ledger,
            rng: SmallRng::from_os_rng(),
        })
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        log::info!("ledger at {}", self.config.ledger().display());
        loop {
            print!("> ");
            std::io::stdout().flush()?;
            let ref mut input = String::new();
            if std::io::stdin().read_line(input)? == 0 {
                break;
            }
            match input.trim() {
                "" => continue,
                "quit" => break,
                "exit" => break,
                _ => match self.handle(input) {
                    Err(e) => eprintln!("{} {}", "error:".red(), e),
                    Ok(_) => continue,
                },
            }
        }
        Ok(())
    }

    fn handle(&mut self, input: &str) -> anyhow::Result<()> {
        match Query::try_parse_from(std::iter::once("> ").chain(input.split_whitespace()))? {
            Query::Chips { small, big, depth } => {
                let allocation = allocate(small, big, depth)?;
                if depth < MIN_DEPTH {
                    println!("{}", format!("{}bb is shallower than {}bb", depth, MIN_DEPTH).yellow());
                }
                Ok(println!("{}", render::allocation(&allocation)))
            }
            Query::Structure {
                stack,
                speed,
                format,
                variant,
                entries,
            } => self.structure(stack, &speed, &format, &variant, entries),
            Query::Clock { action } => self.clock(action),
            Query::Entries { count } => {
                let tournament = self.tournament_mut()?;
                tournament.set_entries(count);
                Ok(println!("{}", render::tournament(tournament)))
            }
            Query::Remaining { count } => {
                let tournament = self.tournament_mut()?;
                tournament.set_remaining(count);
                Ok(println!("{}", render::tournament(tournament)))
            }
            Query::Bounty { action } => self.bounty(action),
            Query::Pickem { action } => self.pickem(action),
            Query::Ledger { action } => self.ledger(action),
        }
    }

    fn structure(
        &mut self,
        stack: Chips,
        speed: &str,
        format: &str,
        variant: &str,
        entries: usize,
    ) -> anyhow::Result<()> {
        let speed = Speed::try_from(speed).map_err(|e| anyhow!(e))?;
        let format = Format::try_from(format).map_err(|e| anyhow!(e))?;
        let variant = Variant::try_from(variant).map_err(|e| anyhow!(e))?;
        let structure = Structure::new(stack, speed)?;
        let tournament = Tournament::new(structure.clone(), format, variant, entries);
        println!("{}", render::tournament(&tournament));
        print!("{}", structure);
        if format.bounties() && self.bounties.is_empty() {
            println!("{}", "load prizes with `bounty load <amount> <quantity>`".yellow());
        }
        self.clock = Some(Clock::from(structure));
        self.tournament = Some(tournament);
        Ok(())
    }

    fn clock(&mut self, action: ClockAction) -> anyhow::Result<()> {
        if let ClockAction::Run = action {
            return self.countdown();
        }
        let clock = self.clock.as_mut().ok_or_else(|| anyhow!("no tournament set up"))?;
        match action {
            ClockAction::Start => clock.start(),
            ClockAction::Pause => clock.pause(),
            ClockAction::Tick { seconds } => match clock.tick(seconds) {
                Tick::Advanced(level) => println!("{} {}", "level up".bold().green(), level),
                Tick::Finished => println!("{}", "final level complete".bold().red()),
                Tick::Paused => println!("{}", "clock is paused".yellow()),
                Tick::Running => {}
            },
            ClockAction::Forward => {
                if let Some(level) = clock.forward_minute() {
                    println!("{} {}", "level up".bold().green(), level);
                }
            }
            ClockAction::Rewind => clock.rewind_minute(),
            ClockAction::Next => {
                clock.next_level()?;
            }
            ClockAction::Prev => {
                clock.previous_level()?;
            }
            ClockAction::Show | ClockAction::Run => {}
        }
        Ok(println!("{}", render::clock(clock)))
    }

    /// Hand the clock to a ticking thread and block on stdin until the
    /// user presses Enter. The thread stops on its own at the end of a
    /// level, but the prompt only returns after Enter.
    fn countdown(&mut self) -> anyhow::Result<()> {
        let mut clock = self.clock.take().ok_or_else(|| anyhow!("no tournament set up"))?;
        clock.start();
        crate::rearm();
        println!("{}", "clock running, press Enter to pause".dimmed());
        let ticker = std::thread::spawn(move || {
            let mut last = Instant::now();
            while !crate::interrupted() {
                std::thread::sleep(Duration::from_millis(100));
                if last.elapsed() < Duration::from_secs(1) {
                    continue;
                }
                last += Duration::from_secs(1);
                match clock.tick(1) {
                    Tick::Running => {
                        print!("{}", render::ticker(&clock));
                        std::io::stdout().flush().ok();
                    }
                    Tick::Advanced(level) => {
                        println!("\n{} {}", "level up".bold().green(), level);
                        println!("{}", "press Enter".dimmed());
                        break;
                    }
                    Tick::Finished => {
                        println!("\n{}", "final level complete".bold().red());
                        println!("{}", "press Enter".dimmed());
                        break;
                    }
                    Tick::Paused => break,
                }
            }
            clock.pause();
            clock
        });
        crate::brb();
        let clock = ticker
            .join()
            .map_err(|_| anyhow!("clock thread panicked"))?;
        println!("{}", render::clock(&clock));
        self.clock = Some(clock);
        Ok(())
    }

    fn bounty(&mut self, action: BountyAction) -> anyhow::Result<()> {
        match action {
            BountyAction::Load { amount, quantity } => self.bounties.add(amount, quantity),
            BountyAction::Draw => match self.bounties.draw(&mut self.rng) {
                Some(prize) => println!("{} {}", "bounty".bold(), prize.to_string().green().bold()),
                None => return Err(anyhow!("bounty pool is empty")),
            },
            BountyAction::Clear => self.bounties.clear(),
            BountyAction::Show => {}
        }
        Ok(println!("{}", render::bounties(&self.bounties)))
    }

    fn pickem(&mut self, action: PickemAction) -> anyhow::Result<()> {
        match action {
            PickemAction::Show => {}
            PickemAction::Next => {
                self.rotation.advance();
            }
            PickemAction::Prev => {
                self.rotation.retreat();
            }
            PickemAction::Deal => {
                if let Some(game) = self.rotation.deal() {
                    println!("{} {}", "orbit complete, now playing".bold(), game);
                }
            }
            PickemAction::Pick { name } => {
                let game = match name.is_empty() {
                    true => self.choose()?,
                    false => Game::try_from(name.join(" ").as_str()).map_err(|e| anyhow!(e))?,
                };
                self.rotation.select(game)?;
            }
            PickemAction::List => return Ok(println!("{}", render::games(&self.rotation))),
        }
        Ok(println!("{}", render::rotation(&self.rotation)))
    }

    fn choose(&self) -> anyhow::Result<Game> {
        let games = self.rotation.games();
        let current = games
            .iter()
            .position(|g| *g == self.rotation.current())
            .unwrap_or(0);
        let names = games.iter().map(Game::name).collect::<Vec<&str>>();
        let selection = Select::new()
            .with_prompt("game")
            .report(false)
            .items(names.as_slice())
            .default(current)
            .interact()?;
        Ok(games[selection])
    }

    fn ledger(&mut self, action: LedgerAction) -> anyhow::Result<()> {
        match action {
            LedgerAction::Show => {}
            LedgerAction::Add {
                buy_in,
                payout,
                date,
            } => {
                let date = match date {
                    Some(date) => NaiveDate::parse_from_str(&date, "%Y-%m-%d")
                        .with_context(|| format!("invalid date {}", date))?,
                    None => chrono::Local::now().date_naive(),
                };
                let buy_in = match buy_in {
                    Some(buy_in) => buy_in,
                    None => Input::<Chips>::new()
                        .with_prompt("buy-in")
                        .validate_with(|v: &Chips| -> Result<(), &str> {
                            match *v > 0 {
                                true => Ok(()),
                                false => Err("buy-in must be greater than 0"),
                            }
                        })
                        .interact_text()?,
                };
                let payout = match payout {
                    Some(payout) => payout,
                    None => Input::<Chips>::new()
                        .with_prompt("payout")
                        .default(0)
                        .interact_text()?,
                };
                self.ledger.add(Session::new(date, buy_in, payout)?);
                self.ledger.save(self.config.ledger())?;
            }
            LedgerAction::Remove { number } => {
                let index = number
                    .checked_sub(1)
                    .ok_or_else(|| anyhow!("sessions are numbered from 1"))?;
                let session = self.ledger.remove(index)?;
                self.ledger.save(self.config.ledger())?;
                println!("removed {}", session);
            }
        }
        Ok(println!("{}", render::ledger(&self.ledger)))
    }

    fn tournament_mut(&mut self) -> anyhow::Result<&mut Tournament> {
        self.tournament
            .as_mut()
            .ok_or_else(|| anyhow!("no tournament set up"))
    }
}
