use clap::{Parser, ValueEnum};
use seatbook_core::models::Role;

/// Interactive seat booking for a single aircraft cabin
///
/// Seatbook shows the cabin layout, recommends seats by preference, books
/// them under a unique reference and frees them again. Staff get extra menu
/// entries and see booking references on the seat map.
#[derive(Parser)]
#[command(version, about, name = "seatbook")]
pub struct Args {
    /// Who is using the terminal
    #[arg(long, value_enum, default_value_t = RoleArg::Customer)]
    pub role: RoleArg,

    /// Disable colored output and use plain text
    #[arg(long)]
    pub no_color: bool,

    /// Seed for booking references, so a session can be replayed exactly
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Command-line representation of the caller role
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum RoleArg {
    /// Passenger view: booked seats show as occupied only
    Customer,
    /// Airline staff: booking references and staff-only menu entries
    Staff,
}

impl From<RoleArg> for Role {
    fn from(val: RoleArg) -> Self {
        match val {
            RoleArg::Customer => Role::Customer,
            RoleArg::Staff => Role::Staff,
        }
    }
}
