//! Solver registry for looking up and constructing solvers

use crate::error::{RegistrationError, SolverError};
use crate::solver::{PuzzleId, Solver};
use std::collections::BTreeMap;

/// First year a puzzle calendar exists for
pub const BASE_YEAR: u16 = 2015;
/// Number of calendar years accepted for registration (2015-2034)
pub const MAX_YEARS: u16 = 20;
/// Days per calendar year (1-25)
pub const DAYS_PER_YEAR: u8 = 25;

/// Check that a year/day pair can name a puzzle
#[inline]
fn validate(year: u16, day: u8) -> Result<PuzzleId, RegistrationError> {
    let year_ok = (BASE_YEAR..BASE_YEAR + MAX_YEARS).contains(&year);
    let day_ok = (1..=DAYS_PER_YEAR).contains(&day);
    if year_ok && day_ok {
        Ok(PuzzleId::new(year, day))
    } else {
        Err(RegistrationError::InvalidYearDay(year, day))
    }
}

/// Factory producing a fresh solver instance
pub type SolverFactory = Box<dyn Fn() -> Box<dyn Solver> + Send + Sync>;

/// Construct a boxed solver from its `Default` value.
///
/// Used as the constructor of derive-registered plugins.
pub fn construct<S>() -> Box<dyn Solver>
where
    S: Solver + Default + 'static,
{
    Box::new(S::default())
}

/// Builder for constructing a SolverRegistry with fluent API
///
/// Every entry is an explicit `(year, day) -> constructor` mapping. Registering the same
/// identifier twice is allowed here; the conflict surfaces as
/// [`SolverError::Ambiguous`] when that identifier is resolved.
///
/// # Example
///
/// ```
/// use aoc_solver::{PuzzleId, RegistryBuilder, SolveError, Solver};
///
/// #[derive(Default)]
/// struct Day1;
///
/// impl Solver for Day1 {
///     fn part_a(&self, input: &[String]) -> Result<String, SolveError> {
///         Ok(input.len().to_string())
///     }
///     fn part_b(&self, _input: &[String]) -> Result<String, SolveError> {
///         Ok("0".to_string())
///     }
/// }
///
/// let registry = RegistryBuilder::new()
///     .register(2024, 1, || Box::new(Day1))
///     .unwrap()
///     .build();
///
/// let solver = registry.resolve(PuzzleId::new(2024, 1)).unwrap();
/// assert_eq!(solver.part_a(&["x".to_string()]).unwrap(), "1");
/// assert!(registry.resolve(PuzzleId::new(2024, 2)).is_err());
/// ```
pub struct RegistryBuilder {
    solvers: BTreeMap<PuzzleId, Vec<SolverFactory>>,
}

impl RegistryBuilder {
    /// Create a new empty registry builder
    pub fn new() -> Self {
        Self {
            solvers: BTreeMap::new(),
        }
    }

    /// Register a solver factory for a specific year and day
    ///
    /// # Returns
    /// * `Ok(Self)` - Builder with the solver registered, ready for chaining
    /// * `Err(RegistrationError)` - Year or day out of range
    pub fn register<F>(mut self, year: u16, day: u8, factory: F) -> Result<Self, RegistrationError>
    where
        F: Fn() -> Box<dyn Solver> + Send + Sync + 'static,
    {
        let id = validate(year, day)?;
        self.solvers.entry(id).or_default().push(Box::new(factory));
        Ok(self)
    }

    /// Register all collected solver plugins
    ///
    /// Iterates through all plugins submitted via `inventory::submit!` (usually through
    /// `#[derive(AutoRegisterSolver)]`) and registers each one with the builder.
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_solver_plugins(|_| true)
    }

    /// Register solver plugins that match the given filter predicate
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use aoc_solver::RegistryBuilder;
    /// // Register only 2024 solvers tagged as "grid"
    /// let registry = RegistryBuilder::new()
    ///     .register_solver_plugins(|plugin| plugin.year == 2024 && plugin.tags.contains(&"grid"))
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_solver_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin>() {
            if filter(plugin) {
                let constructor = plugin.constructor;
                self = self.register(plugin.year, plugin.day, constructor)?;
            }
        }
        Ok(self)
    }

    /// Finalize the builder and create an immutable registry
    pub fn build(self) -> SolverRegistry {
        tracing::debug!(identifiers = self.solvers.len(), "solver registry built");
        SolverRegistry {
            solvers: self.solvers,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable registry for looking up and creating solvers
///
/// Maps puzzle identifiers to factories. Once built it cannot be modified.
pub struct SolverRegistry {
    solvers: BTreeMap<PuzzleId, Vec<SolverFactory>>,
}

impl SolverRegistry {
    /// Create a fresh solver instance for an identifier
    ///
    /// # Returns
    /// * `Ok(Box<dyn Solver>)` - Exactly one solver is registered for `id`
    /// * `Err(SolverError::NotFound)` - No solver is registered for `id`
    /// * `Err(SolverError::Ambiguous)` - Several solvers are registered for `id`
    pub fn resolve(&self, id: PuzzleId) -> Result<Box<dyn Solver>, SolverError> {
        match self.solvers.get(&id).map(Vec::as_slice) {
            None | Some([]) => Err(SolverError::NotFound(id.year, id.day)),
            Some([factory]) => Ok(factory()),
            Some(candidates) => Err(SolverError::Ambiguous {
                year: id.year,
                day: id.day,
                count: candidates.len(),
            }),
        }
    }

    /// Check whether any solver is registered for `id`
    pub fn contains(&self, id: PuzzleId) -> bool {
        self.solvers.contains_key(&id)
    }

    /// Registered identifiers, ascending
    pub fn ids(&self) -> impl Iterator<Item = PuzzleId> + '_ {
        self.solvers.keys().copied()
    }

    /// Registered days of a year, ascending
    pub fn days(&self, year: u16) -> impl Iterator<Item = u8> + '_ {
        self.ids().filter(move |id| id.year == year).map(|id| id.day)
    }

    /// Number of registered identifiers
    pub fn len(&self) -> usize {
        self.solvers.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.solvers.is_empty()
    }
}

/// Plugin information for automatic solver registration
///
/// Submitted through `inventory` by `#[derive(AutoRegisterSolver)]`.
///
/// # Example
///
/// ```no_run
/// use aoc_solver::{construct, SolveError, Solver, SolverPlugin};
///
/// #[derive(Default)]
/// struct Day1Solver;
///
/// impl Solver for Day1Solver {
///     fn part_a(&self, _: &[String]) -> Result<String, SolveError> {
///         Ok(String::new())
///     }
///     fn part_b(&self, _: &[String]) -> Result<String, SolveError> {
///         Ok(String::new())
///     }
/// }
///
/// inventory::submit! {
///     SolverPlugin {
///         year: 2023,
///         day: 1,
///         constructor: construct::<Day1Solver>,
///         tags: &["easy"],
///     }
/// }
/// ```
pub struct SolverPlugin {
    /// The puzzle year
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
    /// Creates a fresh solver instance
    pub constructor: fn() -> Box<dyn Solver>,
    /// Optional tags for filtering (e.g., "grid", "parallel")
    pub tags: &'static [&'static str],
}

// Enable plugin collection via inventory
inventory::collect!(SolverPlugin);

/// Macro to register a `Default` solver type with a registry builder
///
/// Panics if the year/day pair is out of range.
///
/// # Example
///
/// ```
/// use aoc_solver::{register_solver, PuzzleId, RegistryBuilder, SolveError, Solver};
///
/// #[derive(Default)]
/// struct MyDay1Solver;
///
/// impl Solver for MyDay1Solver {
///     fn part_a(&self, _: &[String]) -> Result<String, SolveError> {
///         Ok("1".to_string())
///     }
///     fn part_b(&self, _: &[String]) -> Result<String, SolveError> {
///         Ok("2".to_string())
///     }
/// }
///
/// let mut builder = RegistryBuilder::new();
/// register_solver!(builder, MyDay1Solver, 2023, 1);
/// let registry = builder.build();
/// assert!(registry.contains(PuzzleId::new(2023, 1)));
/// ```
#[macro_export]
macro_rules! register_solver {
    ($builder:expr, $solver:ty, $year:expr, $day:expr) => {
        $builder = $builder
            .register($year, $day, $crate::construct::<$solver>)
            .expect("Failed to register solver");
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolveError;

    struct Fixed(&'static str);

    impl Solver for Fixed {
        fn part_a(&self, _: &[String]) -> Result<String, SolveError> {
            Ok(self.0.to_string())
        }

        fn part_b(&self, _: &[String]) -> Result<String, SolveError> {
            Ok(self.0.to_string())
        }
    }

    #[test]
    fn test_rejects_out_of_range_identifiers() {
        for (year, day) in [(2014, 1), (2035, 1), (2024, 0), (2024, 26)] {
            let result = RegistryBuilder::new().register(year, day, || Box::new(Fixed("x")));
            assert_eq!(
                result.err(),
                Some(RegistrationError::InvalidYearDay(year, day))
            );
        }
    }

    #[test]
    fn test_duplicate_is_ambiguous_only_for_that_id() {
        let registry = RegistryBuilder::new()
            .register(2024, 1, || Box::new(Fixed("first")))
            .unwrap()
            .register(2024, 1, || Box::new(Fixed("second")))
            .unwrap()
            .register(2024, 2, || Box::new(Fixed("other")))
            .unwrap()
            .build();

        assert_eq!(
            registry.resolve(PuzzleId::new(2024, 1)).err(),
            Some(SolverError::Ambiguous {
                year: 2024,
                day: 1,
                count: 2
            })
        );
        let other = registry.resolve(PuzzleId::new(2024, 2)).unwrap();
        assert_eq!(other.part_a(&[]).unwrap(), "other");
    }

    #[test]
    fn test_days_are_ascending_per_year() {
        let registry = RegistryBuilder::new()
            .register(2024, 13, || Box::new(Fixed("x")))
            .unwrap()
            .register(2023, 5, || Box::new(Fixed("x")))
            .unwrap()
            .register(2024, 2, || Box::new(Fixed("x")))
            .unwrap()
            .build();

        assert_eq!(registry.days(2024).collect::<Vec<_>>(), vec![2, 13]);
        assert_eq!(registry.days(2023).collect::<Vec<_>>(), vec![5]);
        assert_eq!(registry.len(), 3);
    }
}
