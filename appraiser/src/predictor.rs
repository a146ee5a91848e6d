use log::{error, info};

use crate::{
    AppraisalError, FeatureEncoder, ModelBundle, PropertyInput, Result, estimator::Regressor,
};

/// The outcome of one appraisal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appraisal {
    /// Estimated sale price in USD.
    pub price_usd: f64,
    /// `price_usd` divided by the covered area.
    pub price_per_m2: f64,
}

/// Runs the loaded model against form submissions.
pub struct Appraiser<'b> {
    bundle: &'b ModelBundle,
    encoder: FeatureEncoder,
}

impl<'b> Appraiser<'b> {
    /// Creates a new `Appraiser` over a loaded bundle.
    pub fn new(bundle: &'b ModelBundle) -> Self {
        Self {
            bundle,
            encoder: FeatureEncoder::new(bundle.columns()),
        }
    }

    /// Estimates the price of the described property.
    ///
    /// # Arguments
    /// * `input` - One form submission.
    ///
    /// # Returns
    /// The estimate and its price per m², or the error that prevented it. Errors are final for
    /// this submission, nothing is retried.
    pub fn appraise(&self, input: &PropertyInput) -> Result<Appraisal> {
        let res = self.run(input);

        match &res {
            Ok(a) => info!(
                "appraised {} m² in {:?}: {:.0} USD",
                input.area_m2, input.neighborhood, a.price_usd
            ),
            Err(e) => error!("appraisal failed: {e}"),
        }

        res
    }

    fn run(&self, input: &PropertyInput) -> Result<Appraisal> {
        input.validate()?;

        let x = self.encoder.encode(input)?;
        let price_usd = self.bundle.estimator().predict(x.view())?;
        if !price_usd.is_finite() {
            return Err(AppraisalError::NonFinite(price_usd));
        }

        Ok(Appraisal {
            price_usd,
            price_per_m2: price_usd / f64::from(input.area_m2),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::{Estimator, LinearRegressor};

    const COLUMNS: &[&str] = &[
        "sup_cubierta",
        "ambientes",
        "baños",
        "dormitorios",
        "cocheras",
        "precio_expensas",
        "barrio_Palermo",
    ];

    fn linear_bundle(coefficients: Vec<f64>) -> ModelBundle {
        ModelBundle::new(
            Estimator::Linear(LinearRegressor::new(5_000.0, coefficients)),
            COLUMNS.iter().map(|s| s.to_string()).collect(),
        )
        .unwrap()
    }

    fn input() -> PropertyInput {
        PropertyInput {
            neighborhood: "Palermo".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_appraise_divides_by_area() {
        let bundle = linear_bundle(vec![2_000.0, 0.0, 0.0, 0.0, 0.0, 0.0, 10_000.0]);
        let appraisal = Appraiser::new(&bundle).appraise(&input()).unwrap();

        assert_eq!(appraisal.price_usd, 5_000.0 + 60.0 * 2_000.0 + 10_000.0);
        assert_eq!(appraisal.price_per_m2, appraisal.price_usd / 60.0);
    }

    #[test]
    fn test_appraise_reports_feature_mismatch() {
        let bundle = linear_bundle(vec![1.0; 3]);
        assert_eq!(
            Appraiser::new(&bundle).appraise(&input()),
            Err(AppraisalError::FeatureMismatch {
                got: 7,
                expected: 3
            })
        );
    }

    #[test]
    fn test_appraise_rejects_non_finite() {
        let bundle = linear_bundle(vec![f64::INFINITY, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        assert!(matches!(
            Appraiser::new(&bundle).appraise(&input()),
            Err(AppraisalError::NonFinite(_))
        ));
    }

    #[test]
    fn test_appraise_validates_input_first() {
        let bundle = linear_bundle(vec![1.0; 7]);
        let bad = PropertyInput {
            rooms: 0,
            ..input()
        };
        assert!(matches!(
            Appraiser::new(&bundle).appraise(&bad),
            Err(AppraisalError::InvalidInput { field: "rooms", .. })
        ));
    }
}
