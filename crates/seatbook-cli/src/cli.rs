//! Interactive menu session
//!
//! The session owns the registry for the life of the process and drives it
//! through the core handlers. Input is parsed here; the core sees only typed
//! parameters.
//!
//! ```text
//! stdin line → MenuChoice → prompts → Core Params → handler → Display → renderer
//! ```
//!
//! No core error ends the session. Each one is shown as an `Error:` line and
//! the menu comes back; only end of input or `0` leaves the loop.

use std::{io::BufRead, ops::ControlFlow, str::FromStr};

use anyhow::{Context, Result};
use log::{debug, info};
use seatbook_core::{
    display::{FreedSeat, OperationStatus},
    handlers::{
        handle_book, handle_check_availability, handle_free_by_reference, handle_free_seat,
        handle_list_bookings, handle_recommend, handle_seat_map,
    },
    models::{PassengerDetails, Preference, Role},
    params::{BookSeat, FreeByReference, Recommend, Seat},
    BookingRegistry, SeatError,
};

use crate::{
    input::{parse_confirmation, parse_seat, read_line},
    renderer::TerminalRenderer,
};

/// Entries of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CheckAvailability,
    BookSeat,
    FreeByReference,
    ShowLayout,
    ListBookings,
    FreeByPosition,
    ExportBookings,
    Exit,
}

impl MenuChoice {
    /// Menu order as shown to the user
    pub const ALL: [MenuChoice; 8] = [
        MenuChoice::CheckAvailability,
        MenuChoice::BookSeat,
        MenuChoice::FreeByReference,
        MenuChoice::ShowLayout,
        MenuChoice::ListBookings,
        MenuChoice::FreeByPosition,
        MenuChoice::ExportBookings,
        MenuChoice::Exit,
    ];

    pub fn key(self) -> char {
        match self {
            MenuChoice::CheckAvailability => '1',
            MenuChoice::BookSeat => '2',
            MenuChoice::FreeByReference => '3',
            MenuChoice::ShowLayout => '4',
            MenuChoice::ListBookings => '5',
            MenuChoice::FreeByPosition => '6',
            MenuChoice::ExportBookings => '7',
            MenuChoice::Exit => '0',
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::CheckAvailability => "Check availability",
            MenuChoice::BookSeat => "Book seat with preference",
            MenuChoice::FreeByReference => "Free seat by booking reference",
            MenuChoice::ShowLayout => "Show seating layout",
            MenuChoice::ListBookings => "List bookings",
            MenuChoice::FreeByPosition => "Free seat by position",
            MenuChoice::ExportBookings => "Export bookings as JSON",
            MenuChoice::Exit => "Exit",
        }
    }

    /// Entries that expose other passengers' bookings
    pub fn staff_only(self) -> bool {
        matches!(
            self,
            MenuChoice::ListBookings | MenuChoice::FreeByPosition | MenuChoice::ExportBookings
        )
    }
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        MenuChoice::ALL
            .into_iter()
            .find(|choice| {
                let mut chars = s.chars();
                chars.next() == Some(choice.key()) && chars.next().is_none()
            })
            .ok_or_else(|| format!("Unknown menu option: {s}"))
    }
}

/// Markdown menu for `role`. Staff-only entries are marked for customers.
fn menu(role: Role) -> String {
    let mut text = String::from("## Menu\n\n");
    for choice in MenuChoice::ALL {
        let marker = if choice.staff_only() && !role.is_staff() {
            " (staff only)"
        } else {
            ""
        };
        text.push_str(&format!("{}. {}{marker}\n", choice.key(), choice.label()));
    }
    text
}

/// Interactive session over one registry
pub struct Cli<R> {
    registry: BookingRegistry,
    renderer: TerminalRenderer,
    role: Role,
    input: R,
}

impl<R: BufRead> Cli<R> {
    pub fn new(
        registry: BookingRegistry,
        renderer: TerminalRenderer,
        role: Role,
        input: R,
    ) -> Self {
        Self {
            registry,
            renderer,
            role,
            input,
        }
    }

    /// Runs the menu loop until `0` or end of input.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.renderer.render(&menu(self.role))?;
            let Some(line) = self.ask("Choose option: ")? else {
                break;
            };

            let choice = match line.parse::<MenuChoice>() {
                Ok(choice) => choice,
                Err(e) => {
                    debug!("{e}");
                    self.renderer.status(&OperationStatus::failure(
                        "Invalid option. Please select again.",
                    ))?;
                    continue;
                }
            };

            if choice.staff_only() && !self.role.is_staff() {
                info!("Refused staff-only option {} for {}", choice.key(), self.role);
                self.renderer.status(&OperationStatus::failure(
                    "This option requires staff access.",
                ))?;
                continue;
            }

            if self.dispatch(choice)?.is_break() {
                break;
            }
        }

        info!("Session ended");
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<ControlFlow<()>> {
        match choice {
            MenuChoice::CheckAvailability => self.check_availability(),
            MenuChoice::BookSeat => self.book_seat(),
            MenuChoice::FreeByReference => self.free_by_reference(),
            MenuChoice::ShowLayout => {
                let map = handle_seat_map(&self.registry, self.role);
                self.renderer.render(&map.to_string())?;
                Ok(ControlFlow::Continue(()))
            }
            MenuChoice::ListBookings => {
                let bookings = handle_list_bookings(&self.registry);
                self.renderer.render(&bookings.to_string())?;
                Ok(ControlFlow::Continue(()))
            }
            MenuChoice::FreeByPosition => self.free_by_position(),
            MenuChoice::ExportBookings => {
                self.export_bookings()?;
                Ok(ControlFlow::Continue(()))
            }
            MenuChoice::Exit => {
                self.renderer.render("Goodbye!\n")?;
                Ok(ControlFlow::Break(()))
            }
        }
    }

    fn check_availability(&mut self) -> Result<ControlFlow<()>> {
        let Some(line) = self.ask("Enter seat (e.g. 3C or 3 3): ")? else {
            return Ok(ControlFlow::Break(()));
        };

        let report = parse_seat(&line)
            .and_then(|position| handle_check_availability(&self.registry, &Seat { position }));
        match report {
            Ok(report) => self.renderer.render(&report.to_string())?,
            Err(e) => self.report_error(&e)?,
        }
        Ok(ControlFlow::Continue(()))
    }

    fn book_seat(&mut self) -> Result<ControlFlow<()>> {
        let Some(line) = self.ask("Enter seat preference (window/aisle/none): ")? else {
            return Ok(ControlFlow::Break(()));
        };
        let preference = match line.parse::<Preference>() {
            Ok(preference) => preference,
            Err(e) => {
                self.renderer.status(&OperationStatus::failure(format!(
                    "{e}. Use window, aisle or none."
                )))?;
                return Ok(ControlFlow::Continue(()));
            }
        };

        let recommendation = handle_recommend(&self.registry, &Recommend { preference });
        self.renderer.render(&recommendation.to_string())?;
        let Some(position) = recommendation.seat else {
            return Ok(ControlFlow::Continue(()));
        };

        let Some(answer) = self.ask("Confirm booking? (y/n): ")? else {
            return Ok(ControlFlow::Break(()));
        };
        if parse_confirmation(&answer) != Some(true) {
            self.renderer
                .status(&OperationStatus::notice("Booking cancelled."))?;
            return Ok(ControlFlow::Continue(()));
        }

        let Some(passenger) = self.ask_passenger()? else {
            return Ok(ControlFlow::Break(()));
        };
        match handle_book(&mut self.registry, &BookSeat { position, passenger }) {
            Ok(confirmation) => {
                self.renderer.render(&confirmation.to_string())?;
                self.renderer
                    .status(&OperationStatus::success("Seat successfully booked."))?;
            }
            Err(e) => self.report_error(&e)?,
        }
        Ok(ControlFlow::Continue(()))
    }

    fn ask_passenger(&mut self) -> Result<Option<PassengerDetails>> {
        let Some(first_name) = self.ask("First name: ")? else {
            return Ok(None);
        };
        let Some(last_name) = self.ask("Last name: ")? else {
            return Ok(None);
        };
        let Some(passport_number) = self.ask("Passport number: ")? else {
            return Ok(None);
        };
        Ok(Some(PassengerDetails {
            first_name,
            last_name,
            passport_number,
        }))
    }

    fn free_by_reference(&mut self) -> Result<ControlFlow<()>> {
        let Some(reference) = self.ask("Enter booking reference: ")? else {
            return Ok(ControlFlow::Break(()));
        };

        match handle_free_by_reference(&mut self.registry, &FreeByReference { reference }) {
            Ok(freed) => self.report_freed(&freed)?,
            Err(e) => self.report_error(&e)?,
        }
        Ok(ControlFlow::Continue(()))
    }

    fn free_by_position(&mut self) -> Result<ControlFlow<()>> {
        let Some(line) = self.ask("Enter seat to free (e.g. 3C or 3 3): ")? else {
            return Ok(ControlFlow::Break(()));
        };

        let freed = parse_seat(&line)
            .and_then(|position| handle_free_seat(&mut self.registry, &Seat { position }));
        match freed {
            Ok(freed) => self.report_freed(&freed)?,
            Err(e) => self.report_error(&e)?,
        }
        Ok(ControlFlow::Continue(()))
    }

    fn export_bookings(&self) -> Result<()> {
        let bookings = self.registry.all_bookings();
        let json =
            serde_json::to_string_pretty(&bookings).context("Failed to serialize bookings")?;
        info!("Exported {} bookings", bookings.len());
        self.renderer.render(&format!("```json\n{json}\n```\n"))
    }

    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        self.renderer.prompt(prompt)?;
        let line = read_line(&mut self.input)?;
        if line.is_none() {
            // Finish the dangling prompt line
            self.renderer.render("\n")?;
            debug!("End of input");
        }
        Ok(line)
    }

    fn report_freed(&self, freed: &FreedSeat) -> Result<()> {
        self.renderer.render(&freed.to_string())?;
        self.renderer
            .status(&OperationStatus::success("Seat successfully freed."))
    }

    fn report_error(&self, error: &SeatError) -> Result<()> {
        self.renderer.status(&OperationStatus::from(error))?;
        if error.is_seat_rejection() {
            self.renderer.status(&OperationStatus::notice(
                "Choose option 4 to see which seats are free.",
            ))?;
        }
        Ok(())
    }
}
