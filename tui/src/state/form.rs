use appraiser::{
    input::{
        AREA_RANGE, BATHS_RANGE, DEFAULT_AREA, DEFAULT_BATHS, DEFAULT_FEE, DEFAULT_ROOMS, FEE_STEP,
        ROOMS_RANGE,
    },
    Appraisal, Appraiser, ModelBundle, PropertyInput,
};

use super::number::NumberInput;

/// Upper bound of the fee box, the model has no limit of its own.
pub const FEE_MAX: u64 = 999_999_999;

/// The inputs of the form, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Area,
    Rooms,
    Baths,
    Parking,
    Fee,
    Neighborhood,
    Submit,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::Area,
        Field::Rooms,
        Field::Baths,
        Field::Parking,
        Field::Fee,
        Field::Neighborhood,
        Field::Submit,
    ];

    fn position(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.position() + len - 1) % len]
    }

    /// Whether the field takes typed digits.
    pub fn is_typed(self) -> bool {
        matches!(self, Field::Area | Field::Fee)
    }
}

/// Result of the last submission.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Success(Appraisal),
    Failure(String),
}

/// Everything the form shows and edits.
pub struct FormState<'b> {
    appraiser: Appraiser<'b>,
    neighborhoods: Vec<&'b str>,
    pub focus: Field,
    pub area: NumberInput,
    pub rooms: NumberInput,
    pub baths: NumberInput,
    pub parking: bool,
    pub fee: NumberInput,
    neighborhood: usize,
    pub outcome: Option<Outcome>,
    pub show_about: bool,
}

impl<'b> FormState<'b> {
    /// Creates the form for a loaded bundle with every field at its default.
    ///
    /// # Returns
    /// `None` if the bundle has no neighborhood columns to choose from.
    pub fn new(bundle: &'b ModelBundle) -> Option<Self> {
        let neighborhoods = bundle.neighborhoods();
        if neighborhoods.is_empty() {
            return None;
        }

        let widen = |r: &std::ops::RangeInclusive<u32>| u64::from(*r.start())..=u64::from(*r.end());

        Some(Self {
            appraiser: Appraiser::new(bundle),
            neighborhoods,
            focus: Field::Area,
            area: NumberInput::new(u64::from(DEFAULT_AREA), widen(&AREA_RANGE), 1),
            rooms: NumberInput::new(u64::from(DEFAULT_ROOMS), widen(&ROOMS_RANGE), 1),
            baths: NumberInput::new(u64::from(DEFAULT_BATHS), widen(&BATHS_RANGE), 1),
            parking: false,
            fee: NumberInput::new(DEFAULT_FEE, 0..=FEE_MAX, FEE_STEP),
            neighborhood: 0,
            outcome: None,
            show_about: false,
        })
    }

    pub fn neighborhoods(&self) -> &[&'b str] {
        &self.neighborhoods
    }

    pub fn neighborhood_index(&self) -> usize {
        self.neighborhood
    }

    pub fn neighborhood(&self) -> &'b str {
        self.neighborhoods[self.neighborhood]
    }

    pub fn focus_next(&mut self) {
        self.commit_drafts();
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.commit_drafts();
        self.focus = self.focus.prev();
    }

    /// Moves the focused field one step up: bigger number, "yes", next neighborhood.
    pub fn increase(&mut self) {
        match self.focus {
            Field::Area => self.area.increment(),
            Field::Rooms => self.rooms.increment(),
            Field::Baths => self.baths.increment(),
            Field::Fee => self.fee.increment(),
            Field::Parking => self.parking = true,
            Field::Neighborhood => {
                self.neighborhood = (self.neighborhood + 1) % self.neighborhoods.len();
            }
            Field::Submit => {}
        }
    }

    /// Moves the focused field one step down.
    pub fn decrease(&mut self) {
        match self.focus {
            Field::Area => self.area.decrement(),
            Field::Rooms => self.rooms.decrement(),
            Field::Baths => self.baths.decrement(),
            Field::Fee => self.fee.decrement(),
            Field::Parking => self.parking = false,
            Field::Neighborhood => {
                let len = self.neighborhoods.len();
                self.neighborhood = (self.neighborhood + len - 1) % len;
            }
            Field::Submit => {}
        }
    }

    pub fn toggle_parking(&mut self) {
        if self.focus == Field::Parking {
            self.parking = !self.parking;
        }
    }

    pub fn type_digit(&mut self, c: char) {
        match self.focus {
            Field::Area => self.area.push_digit(c),
            Field::Fee => self.fee.push_digit(c),
            _ => {}
        }
    }

    pub fn backspace(&mut self) {
        match self.focus {
            Field::Area => self.area.backspace(),
            Field::Fee => self.fee.backspace(),
            _ => {}
        }
    }

    pub fn toggle_about(&mut self) {
        self.show_about = !self.show_about;
    }

    /// Snapshot of the committed values.
    pub fn input(&self) -> PropertyInput {
        PropertyInput {
            area_m2: narrow(self.area.value()),
            rooms: narrow(self.rooms.value()),
            baths: narrow(self.baths.value()),
            parking: self.parking,
            fee_ars: self.fee.value(),
            neighborhood: self.neighborhood().to_string(),
        }
    }

    /// Runs one appraisal over the current values and keeps its outcome.
    pub fn submit(&mut self) {
        self.commit_drafts();

        let outcome = match self.appraiser.appraise(&self.input()) {
            Ok(appraisal) => Outcome::Success(appraisal),
            Err(e) => Outcome::Failure(e.to_string()),
        };
        self.outcome = Some(outcome);
    }

    fn commit_drafts(&mut self) {
        self.area.commit();
        self.fee.commit();
    }
}

// Only used for the area, rooms and baths boxes, whose ranges fit in a `u32`.
fn narrow(v: u64) -> u32 {
    u32::try_from(v).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use appraiser::{
        estimator::{Estimator, LinearRegressor},
        AppraisalError,
    };

    use super::*;

    const COLUMNS: &[&str] = &[
        "sup_cubierta",
        "ambientes",
        "baños",
        "dormitorios",
        "cocheras",
        "precio_expensas",
        "barrio_Palermo",
        "barrio_Belgrano",
    ];

    fn bundle(coefficients: Vec<f64>, columns: &[&str]) -> ModelBundle {
        ModelBundle::new(
            Estimator::Linear(LinearRegressor::new(0.0, coefficients)),
            columns.iter().map(|s| s.to_string()).collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_form_starts_with_defaults() {
        let b = bundle(vec![0.0; 8], COLUMNS);
        let form = FormState::new(&b).unwrap();

        assert_eq!(
            form.input(),
            PropertyInput {
                area_m2: 60,
                rooms: 3,
                baths: 1,
                parking: false,
                fee_ars: 30_000,
                neighborhood: "Belgrano".into(),
            }
        );
        assert!(form.outcome.is_none());
    }

    #[test]
    fn test_form_needs_neighborhoods() {
        let b = bundle(vec![0.0; 6], &COLUMNS[..6]);
        assert!(FormState::new(&b).is_none());
    }

    #[test]
    fn test_focus_wraps() {
        assert_eq!(Field::Submit.next(), Field::Area);
        assert_eq!(Field::Area.prev(), Field::Submit);
        assert_eq!(Field::Parking.next(), Field::Fee);
    }

    #[test]
    fn test_sliders_and_select() {
        let b = bundle(vec![0.0; 8], COLUMNS);
        let mut form = FormState::new(&b).unwrap();

        form.focus = Field::Rooms;
        for _ in 0..10 {
            form.increase();
        }
        assert_eq!(form.input().rooms, 7);

        form.focus = Field::Baths;
        form.decrease();
        assert_eq!(form.input().baths, 1);

        form.focus = Field::Parking;
        form.toggle_parking();
        assert!(form.input().parking);

        form.focus = Field::Neighborhood;
        form.increase();
        assert_eq!(form.neighborhood(), "Palermo");
        form.increase();
        assert_eq!(form.neighborhood(), "Belgrano");
        form.decrease();
        assert_eq!(form.neighborhood(), "Palermo");
    }

    #[test]
    fn test_digits_only_reach_typed_fields() {
        let b = bundle(vec![0.0; 8], COLUMNS);
        let mut form = FormState::new(&b).unwrap();

        form.focus = Field::Rooms;
        form.type_digit('5');
        assert_eq!(form.input().rooms, 3);

        form.focus = Field::Area;
        form.type_digit('1');
        form.type_digit('2');
        form.type_digit('0');
        form.focus_next();
        assert_eq!(form.input().area_m2, 120);
    }

    #[test]
    fn test_submit_success() {
        let mut coefficients = vec![0.0; 8];
        coefficients[0] = 2_000.0;
        let b = bundle(coefficients, COLUMNS);
        let mut form = FormState::new(&b).unwrap();

        form.focus = Field::Area;
        form.type_digit('8');
        form.type_digit('0');
        form.submit();

        let Some(Outcome::Success(a)) = form.outcome else {
            panic!("expected a successful appraisal, got {:?}", form.outcome);
        };
        assert_eq!(a.price_usd, 160_000.0);
        assert_eq!(a.price_per_m2, 2_000.0);
    }

    #[test]
    fn test_submit_failure_is_shown_and_form_stays_usable() {
        let b = bundle(vec![0.0; 2], COLUMNS);
        let mut form = FormState::new(&b).unwrap();

        form.submit();
        let expected = AppraisalError::FeatureMismatch {
            got: 8,
            expected: 2,
        }
        .to_string();
        assert_eq!(form.outcome, Some(Outcome::Failure(expected)));

        form.focus = Field::Rooms;
        form.increase();
        assert_eq!(form.input().rooms, 4);
    }
}
