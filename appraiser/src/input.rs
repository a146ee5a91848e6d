use std::ops::RangeInclusive;

use crate::{AppraisalError, Result};

pub const AREA_RANGE: RangeInclusive<u32> = 20..=500;
pub const ROOMS_RANGE: RangeInclusive<u32> = 1..=7;
pub const BATHS_RANGE: RangeInclusive<u32> = 1..=5;

pub const DEFAULT_AREA: u32 = 60;
pub const DEFAULT_ROOMS: u32 = 3;
pub const DEFAULT_BATHS: u32 = 1;
pub const DEFAULT_FEE: u64 = 30_000;

/// Increment used by the fee input, in ARS.
pub const FEE_STEP: u64 = 5_000;

/// The property described by one form submission.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyInput {
    /// Covered area in m².
    pub area_m2: u32,
    pub rooms: u32,
    pub baths: u32,
    pub parking: bool,
    /// Monthly building fee (expensas) in ARS.
    pub fee_ars: u64,
    pub neighborhood: String,
}

impl PropertyInput {
    /// Checks every field against the ranges the form offers.
    ///
    /// # Returns
    /// An `InvalidInput` error naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        check_range("area", self.area_m2, &AREA_RANGE)?;
        check_range("rooms", self.rooms, &ROOMS_RANGE)?;
        check_range("baths", self.baths, &BATHS_RANGE)
    }

    /// Bedrooms implied by the room count.
    pub fn bedrooms(&self) -> u32 {
        bedrooms_for(self.rooms)
    }
}

impl Default for PropertyInput {
    fn default() -> Self {
        Self {
            area_m2: DEFAULT_AREA,
            rooms: DEFAULT_ROOMS,
            baths: DEFAULT_BATHS,
            parking: false,
            fee_ars: DEFAULT_FEE,
            neighborhood: String::new(),
        }
    }
}

/// A unit has one room more than bedrooms (the living room), but never less than one bedroom.
pub fn bedrooms_for(rooms: u32) -> u32 {
    rooms.saturating_sub(1).max(1)
}

fn check_range(field: &'static str, value: u32, range: &RangeInclusive<u32>) -> Result<()> {
    if range.contains(&value) {
        return Ok(());
    }

    Err(AppraisalError::InvalidInput {
        field,
        msg: format!(
            "{value} is outside {}..={}",
            range.start(),
            range.end()
        ),
    })
}
