//! Tools for running a live home game.
//!
//! - [`chips`]: chip-denomination allocation for cash games, scaled by table size
//! - [`tournament`]: blind structures and the level clock that walks them
//! - [`bounty`]: random bounty draws without replacement
//! - [`pickem`]: the mixed-game rotation and its rules text
//! - [`ledger`]: session buy-ins, payouts, and ROI

pub mod bounty;
pub mod chips;
pub mod config;
pub mod ledger;
pub mod pickem;
pub mod tournament;

#[cfg(feature = "cli")]
pub mod cli;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Currency amounts: blinds, stack values, buy-ins, payouts.
pub type Chips = u64;
/// Number of physical chips of one denomination.
pub type Count = u64;
/// Elapsed or remaining clock time in seconds.
pub type Seconds = u64;

// ============================================================================
// CHIP SET
// ============================================================================
/// Face values available in the physical chip set, ascending.
pub const DENOMINATIONS: [Chips; 7] = [1, 5, 10, 25, 100, 500, 1000];
/// Number of consecutive denominations handed out for one game.
pub const WINDOW: usize = 4;
/// Most chips of a single denomination that still stack comfortably.
pub const CEILING: Count = 20;
/// Comfortable starting counts for the small denominations. Larger
/// denominations have no target and only receive residual value.
pub const TARGETS: [(Chips, Count); 4] = [(1, 20), (5, 15), (10, 10), (25, 6)];
/// Smallest stack, in big blinds, the cash-game form suggests.
pub const MIN_DEPTH: i64 = 50;
/// Default stack, in big blinds, for a cash game.
pub const DEFAULT_DEPTH: i64 = 200;
/// Table sizes the chip table is scaled across.
pub const PLAYERS: std::ops::RangeInclusive<usize> = 2..=9;

// ============================================================================
// TOURNAMENT
// ============================================================================
/// Smallest starting stack a tournament structure is generated for.
pub const MIN_STARTING_STACK: Chips = 100;
/// Default starting stack for a tournament.
pub const DEFAULT_STARTING_STACK: Chips = 1000;
/// Level from which the big-blind ante is collected (1-based).
pub const ANTE_FROM_LEVEL: usize = 2;
/// Standard (small, big) blind progression.
pub const BLINDS: [(Chips, Chips); 20] = [
    (1, 2),
    (2, 4),
    (3, 6),
    (4, 8),
    (5, 10),
    (8, 16),
    (10, 20),
    (15, 30),
    (20, 40),
    (25, 50),
    (30, 60),
    (40, 80),
    (50, 100),
    (60, 120),
    (80, 160),
    (100, 200),
    (125, 250),
    (150, 300),
    (200, 400),
    (250, 500),
];
/// Default entrants when a tournament is first configured.
pub const DEFAULT_ENTRIES: usize = 10;
/// Seconds moved by the clock's minute controls.
pub const MINUTE: Seconds = 60;

// ============================================================================
// PICK'EM
// ============================================================================
/// Hands dealt of one game before the rotation moves on.
pub const DEFAULT_ORBIT: usize = 8;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Writes DEBUG level to file under the configured log directory, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log(config: &config::Config) -> anyhow::Result<()> {
    std::fs::create_dir_all(config.logs())?;
    let settings = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        settings.clone(),
        std::fs::File::create(config.logs().join(format!("{}.log", time)))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        settings.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}

/// Interrupt flag for the running clock.
#[cfg(feature = "cli")]
static INTERRUPTED: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);
/// Check if the user asked the running clock to stop.
#[cfg(feature = "cli")]
pub fn interrupted() -> bool {
    INTERRUPTED.load(std::sync::atomic::Ordering::Relaxed)
}
/// Clear the interrupt flag before a new countdown.
#[cfg(feature = "cli")]
pub fn rearm() {
    INTERRUPTED.store(false, std::sync::atomic::Ordering::Relaxed);
}
/// Block until the user presses Enter, then raise the interrupt flag.
/// The countdown thread polls [`interrupted`] between ticks.
#[cfg(feature = "cli")]
pub fn brb() {
    let ref mut buffer = String::new();
    if let Err(e) = std::io::stdin().read_line(buffer) {
        log::warn!("stdin closed while waiting on clock: {}", e);
    }
    INTERRUPTED.store(true, std::sync::atomic::Ordering::Relaxed);
}
