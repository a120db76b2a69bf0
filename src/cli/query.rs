use crate::Chips;
use crate::DEFAULT_DEPTH;
use crate::DEFAULT_ENTRIES;
use crate::DEFAULT_STARTING_STACK;
use clap::Parser;
use clap::Subcommand;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub enum Query {
    #[command(
        about = "Chips per player for a cash game, scaled across table sizes",
        alias = "c"
    )]
    Chips {
        #[arg(required = true, allow_negative_numbers = true)]
        small: i64,
        #[arg(required = true, allow_negative_numbers = true)]
        big: i64,
        #[arg(default_value_t = DEFAULT_DEPTH, allow_negative_numbers = true)]
        depth: i64,
    },
    #[command(
        about = "Set up a tournament and its blind structure",
        alias = "s"
    )]
    Structure {
        #[arg(default_value_t = DEFAULT_STARTING_STACK)]
        stack: Chips,
        #[arg(default_value = "normal")]
        speed: String,
        #[arg(default_value = "freezeout")]
        format: String,
        #[arg(default_value = "holdem")]
        variant: String,
        #[arg(long, short, default_value_t = DEFAULT_ENTRIES)]
        entries: usize,
    },
    #[command(about = "Drive the level clock", alias = "k")]
    Clock {
        #[command(subcommand)]
        action: ClockAction,
    },
    #[command(about = "Set the number of tournament entries")]
    Entries {
        #[arg(required = true)]
        count: usize,
    },
    #[command(about = "Set the number of players still in")]
    Remaining {
        #[arg(required = true)]
        count: usize,
    },
    #[command(about = "Mystery bounty pool", alias = "b")]
    Bounty {
        #[command(subcommand)]
        action: BountyAction,
    },
    #[command(about = "Pick'em mixed-game rotation", alias = "p")]
    Pickem {
        #[command(subcommand)]
        action: PickemAction,
    },
    #[command(about = "Tournament results and ROI", alias = "l")]
    Ledger {
        #[command(subcommand)]
        action: LedgerAction,
    },
}

#[derive(Subcommand)]
pub enum ClockAction {
    #[command(about = "Start the clock")]
    Start,
    #[command(about = "Pause the clock")]
    Pause,
    #[command(about = "Count down in real time until Enter is pressed")]
    Run,
    #[command(about = "Move a running clock forward by some seconds")]
    Tick {
        #[arg(default_value_t = 1)]
        seconds: u64,
    },
    #[command(about = "Take a minute off the clock", alias = "+min")]
    Forward,
    #[command(about = "Put a minute back on the clock", alias = "back")]
    Rewind,
    #[command(about = "Skip to the next level")]
    Next,
    #[command(about = "Go back to the previous level")]
    Prev,
    #[command(about = "Show the clock and the levels ahead")]
    Show,
}

#[derive(Subcommand)]
pub enum BountyAction {
    #[command(about = "Add prizes of one amount to the pool")]
    Load {
        #[arg(required = true)]
        amount: Chips,
        #[arg(default_value_t = 1)]
        quantity: usize,
    },
    #[command(about = "Draw a prize for a knockout")]
    Draw,
    #[command(about = "Show prizes left in the pool")]
    Show,
    #[command(about = "Empty the pool")]
    Clear,
}

#[derive(Subcommand)]
pub enum PickemAction {
    #[command(about = "Show the current game and its rules")]
    Show,
    #[command(about = "Move to the next game")]
    Next,
    #[command(about = "Move to the previous game")]
    Prev,
    #[command(about = "Jump to a game by name, or choose from a list")]
    Pick { name: Vec<String> },
    #[command(about = "Count a hand dealt of the current game")]
    Deal,
    #[command(about = "List every game in the rotation")]
    List,
}

#[derive(Subcommand)]
pub enum LedgerAction {
    #[command(about = "Record a tournament result, prompting for missing values")]
    Add {
        buy_in: Option<Chips>,
        payout: Option<Chips>,
        #[arg(long, help = "YYYY-MM-DD, defaults to today")]
        date: Option<String>,
    },
    #[command(about = "Show every session with totals")]
    Show,
    #[command(about = "Remove a session by its number in the listing")]
    Remove {
        #[arg(required = true)]
        number: usize,
    },
}
