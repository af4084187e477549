//! Symbolic rendering of results: well-known constants, fractions, multiples
//! of π, degree angles and square roots are shown exactly, everything else
//! as a decimal.

use crate::operations::{AngleMode, PHI, SQRT_3, SQRT_5};
use std::f64::consts::{E, LN_10, LN_2, PI, SQRT_2};

const TOLERANCE: f64 = 1e-10;

const COMMON_CONSTANTS: [(f64, &str); 21] = [
    (PI, "π"),
    (E, "e"),
    (2.0 * PI, "2π"),
    (PI / 2.0, "π/2"),
    (PI / 3.0, "π/3"),
    (PI / 4.0, "π/4"),
    (PI / 6.0, "π/6"),
    (SQRT_2, "√2"),
    (SQRT_3, "√3"),
    (SQRT_5, "√5"),
    (PHI, "φ"),
    (LN_2, "ln(2)"),
    (LN_10, "ln(10)"),
    (1.0, "1"),
    (0.0, "0"),
    (-1.0, "-1"),
    (0.5, "1/2"),
    (0.25, "1/4"),
    (0.75, "3/4"),
    (1.0 / 3.0, "1/3"),
    (2.0 / 3.0, "2/3"),
];

const COMMON_ANGLES_RADIANS: [(f64, &str); 25] = [
    (0.0, "0"),
    (PI / 6.0, "π/6"),
    (PI / 4.0, "π/4"),
    (PI / 3.0, "π/3"),
    (PI / 2.0, "π/2"),
    (2.0 * PI / 3.0, "2π/3"),
    (3.0 * PI / 4.0, "3π/4"),
    (5.0 * PI / 6.0, "5π/6"),
    (PI, "π"),
    (7.0 * PI / 6.0, "7π/6"),
    (5.0 * PI / 4.0, "5π/4"),
    (4.0 * PI / 3.0, "4π/3"),
    (3.0 * PI / 2.0, "3π/2"),
    (5.0 * PI / 3.0, "5π/3"),
    (7.0 * PI / 4.0, "7π/4"),
    (11.0 * PI / 6.0, "11π/6"),
    (2.0 * PI, "2π"),
    (-PI / 6.0, "-π/6"),
    (-PI / 4.0, "-π/4"),
    (-PI / 3.0, "-π/3"),
    (-PI / 2.0, "-π/2"),
    (-2.0 * PI / 3.0, "-2π/3"),
    (-3.0 * PI / 4.0, "-3π/4"),
    (-5.0 * PI / 6.0, "-5π/6"),
    (-PI, "-π"),
];

const COMMON_ANGLES_DEGREES: [(f64, &str); 25] = [
    (0.0, "0°"),
    (30.0, "30°"),
    (45.0, "45°"),
    (60.0, "60°"),
    (90.0, "90°"),
    (120.0, "120°"),
    (135.0, "135°"),
    (150.0, "150°"),
    (180.0, "180°"),
    (210.0, "210°"),
    (225.0, "225°"),
    (240.0, "240°"),
    (270.0, "270°"),
    (300.0, "300°"),
    (315.0, "315°"),
    (330.0, "330°"),
    (360.0, "360°"),
    (-30.0, "-30°"),
    (-45.0, "-45°"),
    (-60.0, "-60°"),
    (-90.0, "-90°"),
    (-120.0, "-120°"),
    (-135.0, "-135°"),
    (-150.0, "-150°"),
    (-180.0, "-180°"),
];

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < TOLERANCE
}

fn lookup(table: &[(f64, &'static str)], value: f64) -> Option<&'static str> {
    table
        .iter()
        .find(|(candidate, _)| close(value, *candidate))
        .map(|(_, display)| *display)
}

/// Integral value within the range the symbolic forms are rendered for.
fn small_integer(value: f64) -> Option<i64> {
    (value.abs() <= i32::MAX as f64).then(|| value as i64)
}

fn gcd(a: i64, b: i64) -> i64 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

fn format_pi_fraction(numerator: i64, denominator: i64) -> String {
    let divisor = gcd(numerator.abs(), denominator);
    match (numerator / divisor, denominator / divisor) {
        (0, _) => "0".to_string(),
        (1, 1) => "π".to_string(),
        (-1, 1) => "-π".to_string(),
        (k, 1) => format!("{}π", k),
        (1, d) => format!("π/{}", d),
        (-1, d) => format!("-π/{}", d),
        (k, d) => format!("{}π/{}", k, d),
    }
}

fn format_radians(value: f64) -> Option<String> {
    if let Some(display) = lookup(&COMMON_ANGLES_RADIANS, value) {
        return Some(display.to_string());
    }

    let multiple = value / PI;
    if close(multiple, multiple.trunc()) {
        if let Some(multiple) = small_integer(multiple.trunc()) {
            return Some(format_pi_fraction(multiple, 1));
        }
    }

    (2..=12).find_map(|denominator: i64| {
        let numerator = small_integer((value * denominator as f64 / PI).round())?;
        close(value, numerator as f64 * PI / denominator as f64)
            .then(|| format_pi_fraction(numerator, denominator))
    })
}

fn format_degrees(value: f64) -> Option<String> {
    if let Some(display) = lookup(&COMMON_ANGLES_DEGREES, value) {
        return Some(display.to_string());
    }

    let rounded = value.round();
    let degrees = small_integer(rounded)?;
    close(value, rounded).then(|| format!("{}°", degrees))
}

fn format_fraction(value: f64) -> Option<String> {
    (2..=16).find_map(|denominator: i64| {
        let numerator = small_integer((value * denominator as f64).round())?;
        if !close(value, numerator as f64 / denominator as f64) {
            return None;
        }

        let divisor = gcd(numerator.abs(), denominator);
        Some(match (numerator / divisor, denominator / divisor) {
            (n, 1) => n.to_string(),
            (n, d) => format!("{}/{}", n, d),
        })
    })
}

fn format_square_root(value: f64) -> Option<String> {
    (2..=20).find_map(|i: u32| {
        let root = f64::from(i).sqrt();
        if close(value, root) {
            Some(format!("√{}", i))
        } else if close(value, -root) {
            Some(format!("-√{}", i))
        } else {
            None
        }
    })
}

/// `1.234568e+06` style: six fractional digits, signed two digit exponent.
fn format_scientific(value: f64) -> String {
    let formatted = format!("{:.6e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exponent) => {
                let sign = if exponent < 0 { '-' } else { '+' };
                format!("{}e{}{:02}", mantissa, sign, exponent.abs())
            }
            Err(_) => formatted,
        },
        None => formatted,
    }
}

/// Fixed notation carrying `digits` significant digits. The exponent is read
/// after rounding, so a carry into a new digit does not add one.
fn format_significant(value: f64, digits: i32) -> String {
    let precision = (digits - 1).max(0) as usize;
    let rounded = format!("{:.*e}", precision, value);
    let magnitude = rounded
        .split_once('e')
        .and_then(|(_, exponent)| exponent.parse::<i32>().ok())
        .unwrap_or(0);
    let decimals = (digits - 1 - magnitude).max(0) as usize;
    format!("{:.*}", decimals, value)
}

fn format_decimal(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else if value.abs() < TOLERANCE {
        "0".to_string()
    } else if value == (value as i64) as f64 {
        (value as i64).to_string()
    } else if value.abs() > 1e6 || value.abs() < 1e-4 {
        format_scientific(value)
    } else {
        format_significant(value, 10)
    }
}

/// Renders `value` for display, preferring an exact symbolic form.
///
/// Candidates are tried in order and compared within an absolute tolerance of
/// `1e-10`: known constants, then angles for the given mode (fractions of π
/// in radians, whole degrees in degrees), then fractions with denominators up
/// to 16, then `±√n` for `n` up to 20. Anything else is printed as a decimal.
pub fn format_value(value: f64, mode: AngleMode) -> String {
    lookup(&COMMON_CONSTANTS, value)
        .map(str::to_string)
        .or_else(|| match mode {
            AngleMode::radians => format_radians(value),
            AngleMode::degrees => format_degrees(value),
        })
        .or_else(|| format_fraction(value))
        .or_else(|| format_square_root(value))
        .unwrap_or_else(|| format_decimal(value))
}

/// Whether `value` is one of the common angles of the given mode.
pub fn is_nice_angle(value: f64, mode: AngleMode) -> bool {
    let table = match mode {
        AngleMode::radians => &COMMON_ANGLES_RADIANS,
        AngleMode::degrees => &COMMON_ANGLES_DEGREES,
    };
    lookup(table, value).is_some()
}

pub fn angle_description(value: f64, mode: AngleMode) -> Option<&'static str> {
    match format_value(value, mode).as_str() {
        "0" | "0°" => Some("zero angle"),
        "π/2" | "90°" => Some("right angle"),
        "π" | "180°" => Some("straight angle"),
        "2π" | "360°" => Some("full circle"),
        "π/4" | "45°" => Some("half right angle"),
        "π/3" | "60°" | "π/6" | "30°" => Some("acute angle"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use AngleMode::{degrees, radians};

    #[test]
    fn known_constants_win_first() {
        assert_eq!(format_value(PI / 2.0, radians), "π/2");
        assert_eq!(format_value(PI, degrees), "π");
        assert_eq!(format_value(E, radians), "e");
        assert_eq!(format_value((1.0 + 5f64.sqrt()) / 2.0, radians), "φ");
        assert_eq!(format_value(2f64.ln(), radians), "ln(2)");
        assert_eq!(format_value(0.5, radians), "1/2");
        assert_eq!(format_value(1.0 / 3.0, degrees), "1/3");
        assert_eq!(format_value(-1.0, degrees), "-1");
    }

    #[test]
    fn values_within_tolerance_match() {
        assert_eq!(format_value(PI + 5e-11, radians), "π");
        assert_eq!(format_value(1e-12, radians), "0");
        assert_ne!(format_value(PI + 1e-9, radians), "π");
    }

    #[test]
    fn radian_angle_table() {
        assert_eq!(format_value(3.0 * PI / 2.0, radians), "3π/2");
        assert_eq!(format_value(-3.0 * PI / 4.0, radians), "-3π/4");
        assert_eq!(format_value(11.0 * PI / 6.0, radians), "11π/6");
    }

    #[test]
    fn integer_multiples_of_pi() {
        assert_eq!(format_value(4.0 * PI, radians), "4π");
        assert_eq!(format_value(-2.0 * PI, radians), "-2π");
        assert_eq!(format_value(3.0 * PI, radians), "3π");
    }

    #[test]
    fn scanned_fractions_of_pi() {
        assert_eq!(format_value(7.0 * PI / 12.0, radians), "7π/12");
        assert_eq!(format_value(PI / 5.0, radians), "π/5");
        assert_eq!(format_value(-PI / 8.0, radians), "-π/8");
        assert_eq!(format_value(9.0 * PI / 4.0, radians), "9π/4");
    }

    #[test]
    fn pi_forms_only_in_radian_mode() {
        assert_ne!(format_value(7.0 * PI / 12.0, degrees), "7π/12");
        assert!(!format_value(3.0 * PI / 2.0, degrees).contains('π'));
    }

    #[test]
    fn degree_angles() {
        assert_eq!(format_value(90.0, degrees), "90°");
        assert_eq!(format_value(-135.0, degrees), "-135°");
        assert_eq!(format_value(37.0, degrees), "37°");
        assert_eq!(format_value(720.0, degrees), "720°");
        assert_eq!(format_value(89.999_999_999_99, degrees), "90°");
    }

    #[test]
    fn plain_fractions_are_reduced() {
        assert_eq!(format_value(2.0, radians), "2");
        assert_eq!(format_value(0.3, radians), "3/10");
        assert_eq!(format_value(-1.25, radians), "-5/4");
        assert_eq!(format_value(6.0 / 16.0, radians), "3/8");
        assert_eq!(format_value(0.3, degrees), "3/10");
        assert_eq!(format_value(1.0 / 7.0, radians), "1/7");
    }

    #[test]
    fn square_roots_of_small_integers() {
        assert_eq!(format_value(7f64.sqrt(), radians), "√7");
        assert_eq!(format_value(-(2f64.sqrt()), radians), "-√2");
        assert_eq!(format_value(19f64.sqrt(), degrees), "√19");
        assert_eq!(format_value(2f64.sqrt(), radians), "√2");
    }

    #[test]
    fn decimal_fallback() {
        assert_eq!(format_value(3f64.ln(), radians), "1.098612289");
        assert_eq!(format_value(1234567.891, radians), "1.234568e+06");
        assert_eq!(format_value(0.000_012_34, radians), "1.234000e-05");
        assert_eq!(format_value(1e15, radians), "1000000000000000");
        assert_eq!(format_value(f64::NAN, radians), "NaN");
        assert_eq!(format_value(f64::INFINITY, radians), "Infinity");
        assert_eq!(format_value(f64::NEG_INFINITY, degrees), "-Infinity");
    }

    #[test]
    fn significant_digits_keep_trailing_zeros() {
        assert_eq!(format_significant(0.012_3, 10), "0.01230000000");
        assert_eq!(format_significant(123.456, 10), "123.4560000");
    }

    #[test]
    fn rounding_carry_keeps_ten_significant_digits() {
        assert_eq!(format_significant(9.9999999996, 10), "10.00000000");
        assert_eq!(format_value(9.9999999996, radians), "10.00000000");
        assert_eq!(format_value(999999.99999999, radians), "1000000.000");
        assert_eq!(format_significant(0.099_999_999_999, 10), "0.1000000000");
    }

    #[test]
    fn nice_angles_come_from_the_tables_only() {
        assert!(is_nice_angle(PI / 2.0, radians));
        assert!(is_nice_angle(5.0 * PI / 4.0, radians));
        assert!(!is_nice_angle(7.0 * PI / 12.0, radians));
        assert!(!is_nice_angle(0.3, radians));
        assert!(is_nice_angle(225.0, degrees));
        assert!(!is_nice_angle(37.0, degrees));
        assert!(!is_nice_angle(90.0, radians));
    }

    #[test]
    fn angle_descriptions() {
        assert_eq!(angle_description(PI, radians), Some("straight angle"));
        assert_eq!(angle_description(90.0, degrees), Some("right angle"));
        assert_eq!(angle_description(0.0, degrees), Some("zero angle"));
        assert_eq!(angle_description(2.0 * PI, radians), Some("full circle"));
        assert_eq!(angle_description(45.0, degrees), Some("half right angle"));
        assert_eq!(angle_description(PI / 6.0, radians), Some("acute angle"));
        assert_eq!(angle_description(1.0, radians), None);
    }
}
