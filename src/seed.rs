//! Random generators and seeds.
//!
//! All the samplers of [crate::distn] draw their numbers from a [Generator].
//! Wich generator is used depends on the [Seed] given to them:
//!
//!  - No seed: the default generator of the [RngContext] is used (and advanced).
//!  - [Seed::Fresh] (R's `TRUE`): a new generator seeded from the OS entropy.
//!  - [Seed::Snapshot] (R's `FALSE`): a copy of the default generator. The
//!     default generator is **not** advanced.
//!  - [Seed::Fixed]: a new generator deterministically seeded with the value.
//!  - [Seed::Instance]: the given generator, wich is advanced in place.
//!
//! The default generator lives in an [RngContext] that the caller owns and
//! passes to the samplers, instead of a hidden global.
//!

use std::ops::{Deref, DerefMut};

use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug, trace};

use crate::errors::DistnError;

/// The pseudo random number generator used trough all the library.
pub type Generator = StdRng;

/// Describes how to obtain a [Generator]. See the [module docs](crate::seed).
#[derive(Debug)]
pub enum Seed<'a> {
    /// A new generator seeded from the OS entropy.
    Fresh,
    /// A new generator with the same state as the default generator.
    Snapshot,
    /// A new generator seeded with the given value.
    Fixed(u64),
    /// A generator owned by the caller. It is used (and advanced) in place.
    Instance(&'a mut Generator),
}

/// The generator obtained from a [Seed]: either a new one or the one
/// borrowed from the caller. Dereferences to [Generator] in both cases.
#[derive(Debug)]
pub enum ResolvedGenerator<'a> {
    Owned(Generator),
    Borrowed(&'a mut Generator),
}

/// Holds the default generator, the equivalent of R's `.Random.seed`.
#[derive(Debug, Clone)]
pub struct RngContext {
    generator: Generator,
}

impl RngContext {
    /// Creates a new context with a default generator seeded from the OS entropy.
    pub fn new() -> RngContext {
        return RngContext {
            generator: Generator::from_os_rng(),
        };
    }

    /// Creates a new context with a deterministic default generator.
    pub fn from_seed(seed: u64) -> RngContext {
        return RngContext {
            generator: Generator::seed_from_u64(seed),
        };
    }

    /// Reseeds the default generator. Equivalent to R's `set.seed`.
    pub fn set_seed(&mut self, seed: u64) {
        debug!(seed, "reseeding the default generator");
        self.generator = Generator::seed_from_u64(seed);
    }

    /// Returns a copy of the default generator. Drawing from the copy does
    /// not advance the default generator.
    pub fn get_state(&self) -> Generator {
        return self.generator.clone();
    }

    /// Replaces the default generator. Used to restore a state obtained
    /// with [RngContext::get_state].
    pub fn set_state(&mut self, state: Generator) {
        self.generator = state;
    }

    /// Mutable access to the default generator.
    pub fn generator_mut(&mut self) -> &mut Generator {
        return &mut self.generator;
    }

    /// Obtains the generator described by `seed`. Never fails since every
    /// [Seed] is valid. Use [test_seed] to also parse the seed.
    pub fn resolve<'a>(&self, seed: Seed<'a>) -> ResolvedGenerator<'a> {
        return match seed {
            Seed::Fresh => {
                trace!("fresh generator from OS entropy");
                ResolvedGenerator::Owned(Generator::from_os_rng())
            }
            Seed::Snapshot => {
                trace!("snapshot of the default generator");
                ResolvedGenerator::Owned(self.generator.clone())
            }
            Seed::Fixed(value) => {
                trace!(seed = value, "generator with a fixed seed");
                ResolvedGenerator::Owned(Generator::seed_from_u64(value))
            }
            Seed::Instance(generator) => {
                trace!("generator instance given by the caller");
                ResolvedGenerator::Borrowed(generator)
            }
        };
    }
}

impl Default for RngContext {
    fn default() -> Self {
        RngContext::new()
    }
}

impl Deref for ResolvedGenerator<'_> {
    type Target = Generator;

    fn deref(&self) -> &Self::Target {
        return match self {
            ResolvedGenerator::Owned(generator) => generator,
            ResolvedGenerator::Borrowed(generator) => generator,
        };
    }
}

impl DerefMut for ResolvedGenerator<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        return match self {
            ResolvedGenerator::Owned(generator) => generator,
            ResolvedGenerator::Borrowed(generator) => generator,
        };
    }
}

impl From<bool> for Seed<'_> {
    fn from(value: bool) -> Self {
        if value { Seed::Fresh } else { Seed::Snapshot }
    }
}

// `u64` is the only integer type with an infallible conversion, so an
// unsuffixed literal (`.seed(42)`) is inferred as a `u64`.
impl From<u64> for Seed<'_> {
    fn from(value: u64) -> Self {
        Seed::Fixed(value)
    }
}

impl<'a> From<&'a mut Generator> for Seed<'a> {
    fn from(value: &'a mut Generator) -> Self {
        Seed::Instance(value)
    }
}

impl TryFrom<i64> for Seed<'_> {
    type Error = DistnError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        return match u64::try_from(value) {
            Ok(v) => Ok(Seed::Fixed(v)),
            Err(_) => Err(DistnError::InvalidSeed(value.to_string())),
        };
    }
}

impl TryFrom<i32> for Seed<'_> {
    type Error = DistnError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        return Seed::try_from(value as i64);
    }
}

impl TryFrom<&str> for Seed<'_> {
    type Error = DistnError;

    /// Parses the R/Python spellings of a seed: `TRUE`, `T`, `true`,
    /// `FALSE`, `F`, `false` or a non-negative integer.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let trimmed: &str = value.trim();
        return match trimmed {
            "TRUE" | "T" | "true" => Ok(Seed::Fresh),
            "FALSE" | "F" | "false" => Ok(Seed::Snapshot),
            _ => match trimmed.parse::<u64>() {
                Ok(v) => Ok(Seed::Fixed(v)),
                Err(_) => Err(DistnError::InvalidSeed(value.to_string())),
            },
        };
    }
}

/// Normalizes a seed descriptor into a generator.
///
/// `seed` can be anything that converts into a [Seed]: a `bool`, an unsigned
/// integer, a `&mut Generator`, a [Seed] itself, a signed integer or a `&str`.
/// The last 2 may fail with [DistnError::InvalidSeed] (negative numbers or
/// unknown strings).
///
/// ```
/// use RDistributions::{RngContext, test_seed};
/// use rand::Rng;
///
/// let context: RngContext = RngContext::from_seed(1);
/// let mut a = test_seed(42_u64, &context).unwrap();
/// let mut b = test_seed("42", &context).unwrap();
/// assert_eq!(a.random::<u64>(), b.random::<u64>());
///
/// assert!(test_seed("maybe", &context).is_err());
/// ```
pub fn test_seed<'a, S>(seed: S, context: &RngContext) -> Result<ResolvedGenerator<'a>, DistnError>
where
    S: TryInto<Seed<'a>>,
    DistnError: From<<S as TryInto<Seed<'a>>>::Error>,
{
    let seed: Seed<'a> = seed.try_into()?;
    return Ok(context.resolve(seed));
}
