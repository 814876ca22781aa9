//! Builder for creating and configuring BookingRegistry instances.

use log::debug;

use super::BookingRegistry;
use crate::{
    error::Result,
    generator::ReferenceGenerator,
    grid::{LayoutSpec, SeatGrid},
};

/// Builder for creating and configuring BookingRegistry instances.
#[derive(Debug, Clone)]
pub struct RegistryBuilder {
    layout: Option<LayoutSpec>,
    reference_seed: Option<u64>,
}

impl RegistryBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            layout: None,
            reference_seed: None,
        }
    }

    /// Sets the cabin layout.
    ///
    /// If not specified, uses [`LayoutSpec::standard`].
    pub fn with_layout(mut self, layout: LayoutSpec) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Seeds the reference generator so references repeat across runs.
    ///
    /// `None` keeps the default of seeding from operating system entropy.
    pub fn with_reference_seed(mut self, seed: Option<u64>) -> Self {
        if let Some(seed) = seed {
            self.reference_seed = Some(seed);
        }
        self
    }

    /// Builds the configured registry.
    ///
    /// # Errors
    ///
    /// Returns `SeatError::InvalidLayout` if the layout cannot produce a grid
    pub fn build(self) -> Result<BookingRegistry> {
        let layout = self.layout.unwrap_or_default();
        let grid = SeatGrid::build(&layout)?;

        let references = match self.reference_seed {
            Some(seed) => {
                debug!("Seeding reference generator with {seed}");
                ReferenceGenerator::with_seed(seed)
            }
            None => ReferenceGenerator::new(),
        };

        Ok(BookingRegistry::new(grid, references))
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
