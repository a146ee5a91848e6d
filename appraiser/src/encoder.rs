use std::collections::HashMap;

use log::{debug, warn};
use ndarray::Array1;

use crate::{AppraisalError, PropertyInput, Result, bundle::NEIGHBORHOOD_PREFIX};

/// Names of the numeric training columns filled from the form.
pub mod columns {
    pub const AREA: &str = "sup_cubierta";
    pub const ROOMS: &str = "ambientes";
    pub const BATHS: &str = "baños";
    pub const BEDROOMS: &str = "dormitorios";
    pub const PARKING: &str = "cocheras";
    pub const FEE: &str = "precio_expensas";
}

/// Lays a [`PropertyInput`] out as a dense row in training column order.
#[derive(Debug, Clone)]
pub struct FeatureEncoder {
    index: HashMap<String, usize>,
}

impl FeatureEncoder {
    /// Creates a new `FeatureEncoder` for the given training columns.
    pub fn new(columns: &[String]) -> Self {
        let index = columns
            .iter()
            .enumerate()
            .map(|(i, c)| (c.clone(), i))
            .collect();

        Self { index }
    }

    /// Returns the length of the rows this encoder produces.
    pub fn width(&self) -> usize {
        self.index.len()
    }

    /// Builds the feature row for one submission.
    ///
    /// Every column starts at zero. The numeric fields and the derived bedroom count are written
    /// by name, and the indicator of the chosen neighborhood is set to one. An unknown
    /// neighborhood leaves every indicator at zero.
    ///
    /// # Errors
    /// `MissingColumn` if a numeric field has no column in the schema.
    pub fn encode(&self, input: &PropertyInput) -> Result<Array1<f64>> {
        let mut x = Array1::zeros(self.width());

        let numeric = [
            (columns::AREA, f64::from(input.area_m2)),
            (columns::ROOMS, f64::from(input.rooms)),
            (columns::BATHS, f64::from(input.baths)),
            (columns::BEDROOMS, f64::from(input.bedrooms())),
            (columns::PARKING, if input.parking { 1.0 } else { 0.0 }),
            (columns::FEE, input.fee_ars as f64),
        ];

        for (column, value) in numeric {
            let i = self
                .index
                .get(column)
                .ok_or(AppraisalError::MissingColumn(column))?;
            x[*i] = value;
        }

        let indicator = format!("{NEIGHBORHOOD_PREFIX}{}", input.neighborhood);
        match self.index.get(&indicator) {
            Some(&i) => x[i] = 1.0,
            None => warn!("no indicator column '{indicator}', leaving neighborhood unset"),
        }

        debug!("encoded row of {} features", x.len());
        Ok(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA: &[&str] = &[
        "sup_cubierta",
        "ambientes",
        "baños",
        "dormitorios",
        "cocheras",
        "precio_expensas",
        "barrio_Belgrano",
        "barrio_Palermo",
    ];

    fn encoder(schema: &[&str]) -> FeatureEncoder {
        let columns: Vec<String> = schema.iter().map(|s| s.to_string()).collect();
        FeatureEncoder::new(&columns)
    }

    fn input(neighborhood: &str) -> PropertyInput {
        PropertyInput {
            area_m2: 75,
            rooms: 4,
            baths: 2,
            parking: true,
            fee_ars: 45_000,
            neighborhood: neighborhood.into(),
        }
    }

    #[test]
    fn test_encode_follows_column_order() {
        let x = encoder(SCHEMA).encode(&input("Palermo")).unwrap();
        assert_eq!(
            x.to_vec(),
            vec![75.0, 4.0, 2.0, 3.0, 1.0, 45_000.0, 0.0, 1.0]
        );
    }

    #[test]
    fn test_encode_unknown_neighborhood_leaves_indicators_at_zero() {
        let x = encoder(SCHEMA).encode(&input("Recoleta")).unwrap();
        assert_eq!(x.len(), SCHEMA.len());
        assert_eq!(x[6], 0.0);
        assert_eq!(x[7], 0.0);
    }

    #[test]
    fn test_encode_single_room_has_one_bedroom() {
        let mut one_room = input("Belgrano");
        one_room.rooms = 1;
        one_room.parking = false;

        let x = encoder(SCHEMA).encode(&one_room).unwrap();
        assert_eq!(x[3], 1.0);
        assert_eq!(x[4], 0.0);
        assert_eq!(x[6], 1.0);
    }

    #[test]
    fn test_encode_missing_numeric_column() {
        let schema: Vec<&str> = SCHEMA.iter().copied().filter(|c| *c != "baños").collect();
        assert_eq!(
            encoder(&schema).encode(&input("Palermo")),
            Err(AppraisalError::MissingColumn("baños"))
        );
    }
}
