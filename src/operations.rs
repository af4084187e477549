use crate::error_handling::*;
use std::collections::BTreeMap;
use std::f64::consts::{E, LN_10, LN_2, PI, SQRT_2, TAU};
use std::fmt;
use std::str::FromStr;

pub const PHI: f64 = 1.618_033_988_749_895;
pub const SQRT_3: f64 = 1.732_050_807_568_877_2;
pub const SQRT_5: f64 = 2.236_067_977_499_79;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum AngleMode {
    #[default]
    radians,
    degrees,
}

impl AngleMode {
    /// Converts an angle expressed in this mode into radians.
    pub fn to_radians(self, angle: f64) -> f64 {
        match self {
            AngleMode::radians => angle,
            AngleMode::degrees => angle * PI / 180.0,
        }
    }

    /// Converts an angle in radians into this mode.
    pub fn from_radians(self, angle: f64) -> f64 {
        match self {
            AngleMode::radians => angle,
            AngleMode::degrees => angle * 180.0 / PI,
        }
    }
}

impl fmt::Display for AngleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AngleMode::radians => write!(f, "radians"),
            AngleMode::degrees => write!(f, "degrees"),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct InvalidAngleMode;

impl FromStr for AngleMode {
    type Err = InvalidAngleMode;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rad" | "radians" => Ok(AngleMode::radians),
            "deg" | "degrees" => Ok(AngleMode::degrees),
            _ => Err(InvalidAngleMode),
        }
    }
}

/// Named constants available to expressions. Names are stored upper case.
#[derive(Debug, Clone, PartialEq)]
pub struct Constants {
    table: BTreeMap<String, f64>,
}

impl Default for Constants {
    fn default() -> Self {
        let table = [
            ("PI", PI),
            ("E", E),
            ("PHI", PHI),
            ("TAU", TAU),
            ("SQRT2", SQRT_2),
            ("SQRT3", SQRT_3),
            ("LN2", LN_2),
            ("LN10", LN_10),
            ("RIGHT_ANGLE", PI / 2.0),
            ("STRAIGHT_ANGLE", PI),
            ("FULL_CIRCLE", TAU),
        ]
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect();
        Self { table }
    }
}

impl Constants {
    pub fn get(&self, name: &str) -> Option<f64> {
        self.table.get(&name.to_uppercase()).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.table.iter().map(|(name, value)| (name.as_str(), *value))
    }
}

fn is_integral(value: f64) -> bool {
    value == (value as i64) as f64
}

fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

/// Validates an operand of gcd/lcm/shift: non-negative and integral.
fn natural_operand(value: f64, operation: BinaryOperation) -> Result<u64> {
    if value < 0.0 {
        Err(CalcError::domain_of(format!(
            "{} is not defined for negative numbers",
            operation
        )))
    } else if !is_integral(value) {
        Err(CalcError::domain_of(format!(
            "{} is only defined for integers",
            operation
        )))
    } else {
        Ok(value as u64)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperation {
    add,
    subtract,
    multiply,
    divide,
    power,
    modulo,
    min,
    max,
    mean,
    gcd,
    lcm,
    and,
    shift_left,
    shift_right,
}

impl BinaryOperation {
    /// Infix operator for a symbol, if there is one.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        use BinaryOperation::*;
        match symbol {
            '+' => Some(add),
            '-' => Some(subtract),
            '*' => Some(multiply),
            '/' => Some(divide),
            '^' => Some(power),
            '%' => Some(modulo),
            _ => None,
        }
    }

    /// Binding strength of the infix operators: 1 is the loosest.
    /// Operations without infix syntax have none.
    pub fn precedence(&self) -> Option<u8> {
        use BinaryOperation::*;
        match self {
            add | subtract => Some(1),
            multiply | divide | modulo => Some(2),
            power => Some(3),
            _ => None,
        }
    }

    pub fn call(&self, left: f64, right: f64) -> Result<f64> {
        use BinaryOperation::*;

        match self {
            add => Ok(left + right),
            subtract => Ok(left - right),
            multiply => Ok(left * right),
            divide => {
                if right == 0.0 {
                    return Err(CalcError::domain_of("Division by zero"));
                }
                Ok(left / right)
            }
            power => Ok(left.powf(right)),
            modulo => {
                if right == 0.0 {
                    return Err(CalcError::domain_of("Modulo by zero"));
                }
                Ok(left % right)
            }
            min => Ok(left.min(right)),
            max => Ok(left.max(right)),
            mean => Ok((left + right) / 2.0),
            gcd => {
                let (a, b) = (natural_operand(left, *self)?, natural_operand(right, *self)?);
                Ok(self::gcd(a, b) as f64)
            }
            lcm => {
                let (a, b) = (natural_operand(left, *self)?, natural_operand(right, *self)?);
                if a == 0 || b == 0 {
                    return Ok(0.0);
                }
                Ok((a / self::gcd(a, b)) as f64 * b as f64)
            }
            and => Ok(if left != 0.0 && right != 0.0 { 1.0 } else { 0.0 }),
            shift_left | shift_right => {
                let (value, amount) =
                    (natural_operand(left, *self)?, natural_operand(right, *self)?);
                if amount >= u64::BITS as u64 {
                    return Err(CalcError::domain_of(format!(
                        "Shift amount {} is too large",
                        amount
                    )));
                }
                Ok(match self {
                    shift_left => value.wrapping_shl(amount as u32) as f64,
                    _ => (value >> amount) as f64,
                })
            }
        }
    }
}

impl fmt::Display for BinaryOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use BinaryOperation::*;
        let text = match self {
            add => "+",
            subtract => "-",
            multiply => "*",
            divide => "/",
            power => "^",
            modulo => "%",
            min => "min",
            max => "max",
            mean => "mean",
            gcd => "gcd",
            lcm => "lcm",
            and => "and",
            shift_left => "shl",
            shift_right => "shr",
        };
        write!(f, "{}", text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperation {
    negate,
    not,

    sin,
    cos,
    tan,
    cot,
    sec,
    csc,

    arcsin,
    arccos,
    arctan,
    arccot,
    arcsec,
    arccsc,

    sinh,
    cosh,
    tanh,
    coth,
    sech,
    csch,

    asinh,
    acosh,
    atanh,
    acoth,
    asech,
    acsch,

    sqrt,
    abs,
    sign,
    floor,
    ceil,
    round,

    ln,
    log10,
    log2,
    exp,
    log1p,

    factorial,
    is_prime,
    is_even,
    is_odd,
    factors,

    rads,
    degs,
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnknownFunction;

impl FromStr for UnaryOperation {
    type Err = UnknownFunction;

    /// Looks up a function name, ignoring case. Negation has no name.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        use UnaryOperation::*;
        let operation = match s.to_lowercase().as_str() {
            "sin" => sin,
            "cos" => cos,
            "tan" => tan,
            "cot" => cot,
            "sec" => sec,
            "csc" => csc,
            "asin" | "arcsin" => arcsin,
            "acos" | "arccos" => arccos,
            "atan" | "arctan" => arctan,
            "acot" | "arccot" => arccot,
            "asec" | "arcsec" => arcsec,
            "acsc" | "arccsc" => arccsc,
            "sinh" => sinh,
            "cosh" => cosh,
            "tanh" => tanh,
            "coth" => coth,
            "sech" => sech,
            "csch" => csch,
            "asinh" => asinh,
            "acosh" => acosh,
            "atanh" => atanh,
            "acoth" => acoth,
            "asech" => asech,
            "acsch" => acsch,
            "sqrt" => sqrt,
            "abs" => abs,
            "sign" => sign,
            "floor" => floor,
            "ceil" => ceil,
            "round" => round,
            "ln" => ln,
            "log10" => log10,
            "log2" => log2,
            "exp" => exp,
            "log1p" => log1p,
            "not" => not,
            "fact" | "factorial" => factorial,
            "isprime" => is_prime,
            "iseven" => is_even,
            "isodd" => is_odd,
            "factors" => factors,
            "rads" => rads,
            "degs" => degs,
            _ => return Err(UnknownFunction),
        };
        Ok(operation)
    }
}

impl fmt::Display for UnaryOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use UnaryOperation::*;
        let text = match self {
            negate => "-",
            not => "not",
            sin => "sin",
            cos => "cos",
            tan => "tan",
            cot => "cot",
            sec => "sec",
            csc => "csc",
            arcsin => "arcsin",
            arccos => "arccos",
            arctan => "arctan",
            arccot => "arccot",
            arcsec => "arcsec",
            arccsc => "arccsc",
            sinh => "sinh",
            cosh => "cosh",
            tanh => "tanh",
            coth => "coth",
            sech => "sech",
            csch => "csch",
            asinh => "asinh",
            acosh => "acosh",
            atanh => "atanh",
            acoth => "acoth",
            asech => "asech",
            acsch => "acsch",
            sqrt => "sqrt",
            abs => "abs",
            sign => "sign",
            floor => "floor",
            ceil => "ceil",
            round => "round",
            ln => "ln",
            log10 => "log10",
            log2 => "log2",
            exp => "exp",
            log1p => "log1p",
            factorial => "fact",
            is_prime => "isprime",
            is_even => "iseven",
            is_odd => "isodd",
            factors => "factors",
            rads => "rads",
            degs => "degs",
        };
        write!(f, "{}", text)
    }
}

fn factorial_of(n: u64) -> f64 {
    let mut product = 1.0;
    for i in 2..=n {
        product *= i as f64;
        if product.is_infinite() {
            break;
        }
    }
    product
}

fn is_prime(value: f64) -> bool {
    if !is_integral(value) || value < 2.0 {
        return false;
    }
    if value == 2.0 {
        return true;
    }
    if value % 2.0 == 0.0 {
        return false;
    }

    let limit = value.sqrt() as u64;
    (3..=limit).step_by(2).all(|divisor| value % divisor as f64 != 0.0)
}

fn count_divisors(n: u64) -> u64 {
    let mut count = 0;
    let mut divisor = 1;
    while divisor * divisor <= n {
        if n % divisor == 0 {
            count += if divisor * divisor == n { 1 } else { 2 };
        }
        divisor += 1;
    }
    count
}

fn truth(condition: bool) -> f64 {
    if condition {
        1.0
    } else {
        0.0
    }
}

impl UnaryOperation {
    pub fn call(&self, operand: f64, mode: AngleMode) -> Result<f64> {
        use UnaryOperation::*;

        let value = match self {
            negate => -operand,
            not => truth(operand == 0.0),

            sin => mode.to_radians(operand).sin(),
            cos => mode.to_radians(operand).cos(),
            tan => mode.to_radians(operand).tan(),
            cot => 1.0 / mode.to_radians(operand).tan(),
            sec => 1.0 / mode.to_radians(operand).cos(),
            csc => 1.0 / mode.to_radians(operand).sin(),

            arcsin => mode.from_radians(operand.asin()),
            arccos => mode.from_radians(operand.acos()),
            arctan => mode.from_radians(operand.atan()),
            arccot => mode.from_radians((1.0 / operand).atan()),
            arcsec => mode.from_radians((1.0 / operand).acos()),
            arccsc => mode.from_radians((1.0 / operand).asin()),

            sinh => operand.sinh(),
            cosh => operand.cosh(),
            tanh => operand.tanh(),
            coth => 1.0 / operand.tanh(),
            sech => 1.0 / operand.cosh(),
            csch => 1.0 / operand.sinh(),

            asinh => operand.asinh(),
            acosh => {
                if operand < 1.0 {
                    return Err(CalcError::domain_of("Acosh is only defined for x >= 1"));
                }
                operand.acosh()
            }
            atanh => {
                if operand <= -1.0 || operand >= 1.0 {
                    return Err(CalcError::domain_of("Atanh is only defined for -1 < x < 1"));
                }
                operand.atanh()
            }
            acoth => {
                if operand == 0.0 {
                    return Err(CalcError::domain_of("Acoth is undefined for zero"));
                }
                (1.0 / operand).atanh()
            }
            asech => {
                if operand <= 0.0 || operand > 1.0 {
                    return Err(CalcError::domain_of("Asech is only defined for 0 < x <= 1"));
                }
                (1.0 / operand).acosh()
            }
            acsch => {
                if operand == 0.0 {
                    return Err(CalcError::domain_of("Acsch is undefined for zero"));
                }
                (1.0 / operand).asinh()
            }

            sqrt => {
                if operand < 0.0 {
                    return Err(CalcError::domain_of("Square root of negative number"));
                }
                operand.sqrt()
            }
            abs => operand.abs(),
            sign => {
                if operand > 0.0 {
                    1.0
                } else if operand < 0.0 {
                    -1.0
                } else {
                    0.0
                }
            }
            floor => operand.floor(),
            ceil => operand.ceil(),
            round => operand.round_ties_even(),

            ln => {
                if operand <= 0.0 {
                    return Err(CalcError::domain_of("Natural log of non-positive number"));
                }
                operand.ln()
            }
            log10 => {
                if operand <= 0.0 {
                    return Err(CalcError::domain_of("Log10 of non-positive number"));
                }
                operand.log10()
            }
            log2 => {
                if operand <= 0.0 {
                    return Err(CalcError::domain_of("Log2 of non-positive number"));
                }
                operand.log2()
            }
            exp => operand.exp(),
            log1p => {
                if operand <= -1.0 {
                    return Err(CalcError::domain_of(
                        "Logarithm of (1 + x) is undefined for x <= -1",
                    ));
                }
                operand.ln_1p()
            }

            factorial => {
                if operand < 0.0 || !is_integral(operand) {
                    return Err(CalcError::domain_of(
                        "Factorial of negative or non-integer number",
                    ));
                }
                factorial_of(operand as u64)
            }
            is_prime => truth(self::is_prime(operand)),
            is_even => truth(is_integral(operand) && operand % 2.0 == 0.0),
            is_odd => truth(is_integral(operand) && operand % 2.0 != 0.0),
            factors => {
                if operand < 1.0 || !is_integral(operand) {
                    return Err(CalcError::domain_of(
                        "Factors are only defined for positive integers",
                    ));
                }
                count_divisors(operand as u64) as f64
            }

            rads => operand * PI / 180.0,
            degs => operand * 180.0 / PI,
        };
        Ok(value)
    }
}
