use std::fmt::Display;
use std::str::FromStr;
use crate::Error;


/// Default nesting limit for parentheses and unary minus.
pub const DEFAULT_MAX_DEPTH: usize = 256;


/// How far a leading `-` reaches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum UnaryMinus {
    /// `-` negates the whole expression that follows it: `-2^2` is `-4` and `-2+3` is `-5`.
    #[default]
    Expression,

    /// `-` negates only the next number or group: `-2^2` is `4` and `-2+3` is `1`.
    Operand,
}

impl Display for UnaryMinus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnaryMinus::Expression => write!(f, "expression"),
            UnaryMinus::Operand => write!(f, "operand"),
        }
    }
}

impl FromStr for UnaryMinus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "expression" => Ok(UnaryMinus::Expression),
            "operand" => Ok(UnaryMinus::Operand),
            other => Err(Error::InvalidOptions(format!("unknown unary minus mode '{other}', expected 'expression' or 'operand'")))
        }
    }
}


/// Where `^` sits relative to `*` and `/`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PowerBinding {
    /// `^` binds tighter than `*` and `/`: `2*3^2` is `18`.
    #[default]
    Tight,

    /// `^` folds left to right together with `*` and `/`: `2*3^2` is `36`.
    Factor,
}

impl Display for PowerBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PowerBinding::Tight => write!(f, "tight"),
            PowerBinding::Factor => write!(f, "factor"),
        }
    }
}

impl FromStr for PowerBinding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tight" => Ok(PowerBinding::Tight),
            "factor" => Ok(PowerBinding::Factor),
            other => Err(Error::InvalidOptions(format!("unknown power binding '{other}', expected 'tight' or 'factor'")))
        }
    }
}


/// Evaluation settings.
///
/// Create one with [`Options::default()`] or through [`Options::builder()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Options {
    unary_minus: UnaryMinus,
    power_binding: PowerBinding,
    max_depth: usize,
}

impl Options {
    /// Creates a new [`OptionsBuilder`] starting from the default settings.
    ///
    /// # Examples
    /// ```
    /// use maths_parser::{Options, UnaryMinus};
    ///
    /// let options = Options::builder()
    ///     .unary_minus(UnaryMinus::Operand)
    ///     .max_depth(32)
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(options.unary_minus(), UnaryMinus::Operand);
    /// assert_eq!(options.max_depth(), 32);
    /// ```
    pub fn builder() -> OptionsBuilder {
        OptionsBuilder::new()
    }

    /// Binding of a leading `-`.
    pub const fn unary_minus(&self) -> UnaryMinus {
        self.unary_minus
    }

    /// Binding of `^`.
    pub const fn power_binding(&self) -> PowerBinding {
        self.power_binding
    }

    /// Deepest allowed nesting of groups and unary minus.
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            unary_minus: UnaryMinus::default(),
            power_binding: PowerBinding::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}


/// A builder for [`Options`].
#[derive(Debug, Clone)]
pub struct OptionsBuilder {
    unary_minus: UnaryMinus,
    power_binding: PowerBinding,
    max_depth: usize,
}

impl OptionsBuilder {
    fn new() -> Self {
        let defaults = Options::default();
        Self {
            unary_minus: defaults.unary_minus,
            power_binding: defaults.power_binding,
            max_depth: defaults.max_depth,
        }
    }

    /// Sets the binding of a leading `-`.
    pub fn unary_minus(mut self, unary_minus: UnaryMinus) -> Self {
        self.unary_minus = unary_minus;
        self
    }

    /// Sets the binding of `^`.
    pub fn power_binding(mut self, power_binding: PowerBinding) -> Self {
        self.power_binding = power_binding;
        self
    }

    /// Sets the nesting limit.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Validates the settings and builds the [`Options`].
    ///
    /// # Errors
    /// Returns [`Error::InvalidOptions`] if `max_depth` is 0, since no expression
    /// could ever be nested inside a group or negated.
    ///
    /// # Examples
    /// ```
    /// use maths_parser::{Options, Error};
    ///
    /// assert!(Options::builder().build().is_ok());
    /// assert!(matches!(Options::builder().max_depth(0).build(), Err(Error::InvalidOptions(_))));
    /// ```
    pub fn build(self) -> Result<Options, Error> {
        if self.max_depth == 0 {
            return Err(Error::InvalidOptions("max depth must be at least 1".into()));
        }

        Ok(Options {
            unary_minus: self.unary_minus,
            power_binding: self.power_binding,
            max_depth: self.max_depth,
        })
    }
}
