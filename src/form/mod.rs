//! Three-step evaluation wizard.
//!
//! Holds the answers exactly as entered (strings), enforces the field
//! dependencies between make, model and variant, and gates moving forward on
//! the current step being complete. The finished form is submitted as a
//! results-page query string and decoded through [`crate::io::query`], so the
//! wizard and the `query` command share one input path.

use crate::catalog::{self, FUEL_TYPES, TRANSMISSION_TYPES};
use crate::domain::CarAttributes;
use crate::io::query::{attributes_from_query, encode_query};

/// Minimum length of each free-text condition description.
pub const MIN_CONDITION_LEN: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    CarDetails,
    Specifications,
    Condition,
}

impl Step {
    pub const ALL: [Step; 3] = [Step::CarDetails, Step::Specifications, Step::Condition];

    /// 1-based position.
    pub fn number(self) -> usize {
        match self {
            Step::CarDetails => 1,
            Step::Specifications => 2,
            Step::Condition => 3,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::CarDetails => "Car Details",
            Step::Specifications => "Specifications",
            Step::Condition => "Condition",
        }
    }

    pub fn fields(self) -> &'static [Field] {
        match self {
            Step::CarDetails => &[Field::Make, Field::Model, Field::Variant, Field::Year],
            Step::Specifications => &[
                Field::Mileage,
                Field::Transmission,
                Field::EngineCapacity,
                Field::FuelType,
            ],
            Step::Condition => &[
                Field::InteriorCondition,
                Field::ExteriorCondition,
                Field::IsAccidental,
                Field::ModificationStatus,
            ],
        }
    }

    fn next(self) -> Option<Step> {
        match self {
            Step::CarDetails => Some(Step::Specifications),
            Step::Specifications => Some(Step::Condition),
            Step::Condition => None,
        }
    }

    fn prev(self) -> Option<Step> {
        match self {
            Step::CarDetails => None,
            Step::Specifications => Some(Step::CarDetails),
            Step::Condition => Some(Step::Specifications),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Make,
    Model,
    Variant,
    Year,
    Mileage,
    Transmission,
    EngineCapacity,
    FuelType,
    InteriorCondition,
    ExteriorCondition,
    IsAccidental,
    ModificationStatus,
}

/// How a field is edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Picked from a fixed list.
    Choice,
    /// Digits only.
    Number,
    /// Free text.
    Text,
}

impl Field {
    /// Submit order.
    pub const ALL: [Field; 12] = [
        Field::Make,
        Field::Model,
        Field::Variant,
        Field::Year,
        Field::Mileage,
        Field::Transmission,
        Field::EngineCapacity,
        Field::FuelType,
        Field::InteriorCondition,
        Field::ExteriorCondition,
        Field::IsAccidental,
        Field::ModificationStatus,
    ];

    /// Query-string key.
    pub fn key(self) -> &'static str {
        match self {
            Field::Make => "make",
            Field::Model => "model",
            Field::Variant => "variant",
            Field::Year => "year",
            Field::Mileage => "mileage",
            Field::Transmission => "transmission",
            Field::EngineCapacity => "engineCapacity",
            Field::FuelType => "fuelType",
            Field::InteriorCondition => "interiorCondition",
            Field::ExteriorCondition => "exteriorCondition",
            Field::IsAccidental => "isAccidental",
            Field::ModificationStatus => "modificationStatus",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Field::Make => "Make",
            Field::Model => "Model",
            Field::Variant => "Variant",
            Field::Year => "Year",
            Field::Mileage => "Mileage (km)",
            Field::Transmission => "Transmission",
            Field::EngineCapacity => "Engine (cc)",
            Field::FuelType => "Fuel Type",
            Field::InteriorCondition => "Interior",
            Field::ExteriorCondition => "Exterior",
            Field::IsAccidental => "Accident History",
            Field::ModificationStatus => "Modifications",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Field::Mileage | Field::EngineCapacity => FieldKind::Number,
            Field::InteriorCondition | Field::ExteriorCondition => FieldKind::Text,
            _ => FieldKind::Choice,
        }
    }

    fn index(self) -> usize {
        Field::ALL.iter().position(|&f| f == self).unwrap_or(0)
    }
}

/// Wizard state: current step plus one string per field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationForm {
    step: Step,
    values: [String; 12],
}

impl Default for EvaluationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl EvaluationForm {
    pub fn new() -> Self {
        let mut values: [String; 12] = Default::default();
        values[Field::IsAccidental.index()] = "no".to_string();
        values[Field::ModificationStatus.index()] = "stock".to_string();
        Self {
            step: Step::CarDetails,
            values,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn get(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    /// Set a field. A new make clears model and variant; a new model clears
    /// variant.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values[field.index()] = value.into();
        match field {
            Field::Make => {
                self.values[Field::Model.index()].clear();
                self.values[Field::Variant.index()].clear();
            }
            Field::Model => {
                self.values[Field::Variant.index()].clear();
            }
            _ => {}
        }
    }

    /// Options offered for a choice field given the answers so far. Empty for
    /// number and text fields, and for model/variant until their parent is set.
    pub fn choices(&self, field: Field, current_year: i32) -> Vec<String> {
        match field {
            Field::Make => catalog::makes().iter().map(|m| m.name.to_string()).collect(),
            Field::Model => catalog::models_for_make(self.get(Field::Make))
                .iter()
                .map(|m| m.name.to_string())
                .collect(),
            Field::Variant => catalog::variants_for_model(self.get(Field::Make), self.get(Field::Model))
                .iter()
                .map(|v| v.name.to_string())
                .collect(),
            Field::Year => catalog::selectable_years(current_year)
                .into_iter()
                .map(|y| y.to_string())
                .collect(),
            Field::Transmission => TRANSMISSION_TYPES.iter().map(|s| s.to_string()).collect(),
            Field::FuelType => FUEL_TYPES.iter().map(|s| s.to_string()).collect(),
            Field::IsAccidental => vec!["no".to_string(), "yes".to_string()],
            Field::ModificationStatus => vec!["stock".to_string(), "modified".to_string()],
            Field::Mileage
            | Field::EngineCapacity
            | Field::InteriorCondition
            | Field::ExteriorCondition => Vec::new(),
        }
    }

    /// Move a choice field to the next (`delta > 0`) or previous option,
    /// wrapping around. An unset field starts at the first or last option.
    /// Returns `false` when the field has no options.
    pub fn cycle(&mut self, field: Field, delta: i32, current_year: i32) -> bool {
        let options = self.choices(field, current_year);
        if options.is_empty() {
            return false;
        }
        let n = options.len() as i64;
        let next = match options.iter().position(|o| o == self.get(field)) {
            Some(pos) => (pos as i64 + i64::from(delta.signum())).rem_euclid(n),
            None if delta >= 0 => 0,
            None => n - 1,
        };
        let value = options[next as usize].clone();
        self.set(field, value);
        true
    }

    /// Whether the current step is complete.
    pub fn can_proceed(&self) -> bool {
        let filled = |f: Field| !self.get(f).is_empty();
        match self.step {
            Step::CarDetails => {
                filled(Field::Make) && filled(Field::Model) && filled(Field::Variant) && filled(Field::Year)
            }
            Step::Specifications => filled(Field::Mileage) && filled(Field::Transmission) && filled(Field::FuelType),
            Step::Condition => {
                self.get(Field::InteriorCondition).chars().count() >= MIN_CONDITION_LEN
                    && self.get(Field::ExteriorCondition).chars().count() >= MIN_CONDITION_LEN
            }
        }
    }

    /// Advance one step. Refuses on the last step or when the current step is
    /// incomplete.
    pub fn next(&mut self) -> bool {
        if !self.can_proceed() {
            return false;
        }
        match self.step.next() {
            Some(step) => {
                self.step = step;
                true
            }
            None => false,
        }
    }

    pub fn back(&mut self) -> bool {
        match self.step.prev() {
            Some(step) => {
                self.step = step;
                true
            }
            None => false,
        }
    }

    pub fn is_last_step(&self) -> bool {
        self.step.next().is_none()
    }

    /// Percentage of steps reached (33.3, 66.7, 100).
    pub fn progress(&self) -> f64 {
        self.step.number() as f64 / Step::ALL.len() as f64 * 100.0
    }

    /// Number of non-empty answers out of [`Field::ALL`].
    pub fn filled_fields(&self) -> usize {
        self.values.iter().filter(|v| !v.is_empty()).count()
    }

    /// Whether every step's requirements are met.
    pub fn is_complete(&self) -> bool {
        Step::ALL.iter().all(|&step| {
            let probe = EvaluationForm {
                step,
                values: self.values.clone(),
            };
            probe.can_proceed()
        })
    }

    /// Results-page query string for the current answers.
    pub fn to_query_string(&self) -> String {
        encode_query(Field::ALL.iter().map(|&f| (f.key(), self.get(f))))
    }

    pub fn to_attributes(&self, current_year: i32) -> CarAttributes {
        attributes_from_query(&self.to_query_string(), current_year)
    }
}
