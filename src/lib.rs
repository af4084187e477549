//! Expression calculator with angle modes and exact-looking output.
//!
//! Pipeline: text --> `scanning` --> tokens --> `parsing` --> `Expr` -->
//! `evaluating` (angle mode + constants) --> `f64` --> `displaying` --> text.
//!
//! Operators from loosest to tightest: `+ -`, `* / %`, `^`, unary `-`/`+`
//! and function application. Every binary operator folds to the left, so
//! `2^3^2` is `(2^3)^2 = 64`. A function takes a single primary as its
//! argument, so `sin x + 1` is `sin(x) + 1`.
//!
//! ```
//! use trigcalc::*;
//!
//! let mut evaluator = Evaluator::new();
//! evaluator.set_angle_mode(AngleMode::degrees);
//! let value = evaluator.evaluate(&parse("asin(1) / 3")?)?;
//! assert_eq!(format_value(value, evaluator.angle_mode()), "30°");
//! # Ok::<(), CalcError>(())
//! ```

#![allow(nonstandard_style)]

pub mod displaying;
pub mod error_handling;
pub mod evaluating;
pub mod operations;
pub mod parsing;
pub mod scanning;

pub use displaying::{angle_description, format_value, is_nice_angle};
pub use error_handling::{CalcError, ErrorKind, Result};
pub use evaluating::Evaluator;
pub use operations::{AngleMode, BinaryOperation, Constants, UnaryOperation};
pub use parsing::{parse, Expr, Parser};
pub use scanning::{tokenize, Scanner, StringScanner, Token, TokenScanner};
