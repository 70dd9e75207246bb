//! Option exercise style definitions.

use pricer_core::types::Date;

/// Option exercise style.
///
/// Defines when an option can be exercised during its lifetime.
///
/// # Variants
/// - `European`: Exercise only at maturity
/// - `American`: Exercise at any time up to maturity
/// - `Bermudan`: Exercise on specified dates
///
/// # Examples
/// ```
/// use pricer_models::instruments::ExerciseType;
/// use pricer_core::types::Date;
///
/// let bermudan = ExerciseType::bermudan(vec![
///     Date::from_ymd(2024, 6, 28).unwrap(),
///     Date::from_ymd(2024, 12, 31).unwrap(),
/// ]);
/// assert!(!bermudan.is_european());
/// assert_eq!(bermudan.name(), "Bermudan");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExerciseType {
    /// European style: exercise only at maturity.
    #[default]
    European,

    /// American style: exercise at any time up to maturity.
    American,

    /// Bermudan style: exercise on specific dates.
    Bermudan {
        /// Dates on which the holder may exercise
        exercise_dates: Vec<Date>,
    },
}

impl ExerciseType {
    /// Creates a Bermudan exercise style with the given dates.
    #[inline]
    pub fn bermudan(exercise_dates: Vec<Date>) -> Self {
        ExerciseType::Bermudan { exercise_dates }
    }

    /// Returns whether this is a European exercise style.
    #[inline]
    pub fn is_european(&self) -> bool {
        matches!(self, ExerciseType::European)
    }

    /// Returns whether this is an American exercise style.
    #[inline]
    pub fn is_american(&self) -> bool {
        matches!(self, ExerciseType::American)
    }

    /// Human-readable name of the style.
    pub fn name(&self) -> &'static str {
        match self {
            ExerciseType::European => "European",
            ExerciseType::American => "American",
            ExerciseType::Bermudan { .. } => "Bermudan",
        }
    }
}
