use std::f64::consts::PI;
use trigcalc::*;

fn eval_in(mode: AngleMode, text: &str) -> Result<f64> {
    Evaluator::with_angle_mode(mode).evaluate(&parse(text)?)
}

fn eval(text: &str) -> Result<f64> {
    eval_in(AngleMode::radians, text)
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}

#[test]
fn plain_numbers_evaluate_to_themselves() {
    for n in [0.0, 1.0, 42.0, 3.25, 0.125, 1234567.5, 0.001] {
        assert_eq!(eval(&n.to_string()).unwrap(), n);
    }
}

#[test]
fn precedence_and_grouping() {
    assert_eq!(eval("2 + 3 * 4").unwrap(), 14.0);
    assert_eq!(eval("(2 + 3) * 4").unwrap(), 20.0);
    assert_eq!(eval("10 / 2 - 1").unwrap(), 4.0);
}

#[test]
fn power_chains_fold_left() {
    assert_eq!(eval("2^3^2").unwrap(), 64.0);
}

#[test]
fn square_root_and_factorial() {
    assert_eq!(eval("sqrt(16)").unwrap(), 4.0);
    assert_eq!(eval("sqrt(-1)").unwrap_err().kind(), ErrorKind::math_domain);
    assert_eq!(eval("fact(5)").unwrap(), 120.0);
    assert!(eval("fact(-1)").is_err());
}

#[test]
fn trig_in_both_modes() {
    assert_close(eval_in(AngleMode::degrees, "sin(90)").unwrap(), 1.0);
    assert_close(eval_in(AngleMode::radians, "sin(PI/2)").unwrap(), 1.0);
    assert_close(eval_in(AngleMode::degrees, "degs(rads(45))").unwrap(), 45.0);
}

#[test]
fn round_sends_ties_to_even() {
    assert_eq!(eval("round(2.5)").unwrap(), 2.0);
    assert_eq!(eval("round(0.5)").unwrap(), 0.0);
    assert_eq!(eval("round(3.5)").unwrap(), 4.0);
    assert_eq!(eval("round(-2.5)").unwrap(), -2.0);
}

#[test]
fn number_theory_functions() {
    assert_eq!(eval("isprime(17)").unwrap(), 1.0);
    assert_eq!(eval("isprime(18)").unwrap(), 0.0);
    assert_eq!(eval("factors(12)").unwrap(), 6.0);
}

#[test]
fn syntax_errors() {
    assert_eq!(parse("").unwrap_err(), CalcError::empty_expression);

    let error = parse("2 +").unwrap_err();
    assert_eq!(error.kind(), ErrorKind::syntax);
    assert!(error.to_string().contains("end of input"));

    let error = parse("(2 + 3").unwrap_err();
    assert!(matches!(error, CalcError::unclosed_paren(_)));
}

#[test]
fn display_of_results() {
    assert_eq!(format_value(PI / 2.0, AngleMode::radians), "π/2");
    assert_eq!(format_value(0.5, AngleMode::radians), "1/2");
    assert_eq!(format_value(2.0, AngleMode::radians), "2");

    let value = eval("acos(-1) / 3 * 2").unwrap();
    assert_eq!(format_value(value, AngleMode::radians), "2π/3");

    let value = eval_in(AngleMode::degrees, "atan(1) * 3").unwrap();
    assert_eq!(format_value(value, AngleMode::degrees), "135°");
}

#[test]
fn descriptions_for_results_in_degrees() {
    let value = eval_in(AngleMode::degrees, "asin(1)").unwrap();
    assert!(is_nice_angle(value, AngleMode::degrees));
    assert_eq!(angle_description(value, AngleMode::degrees), Some("right angle"));
}

#[test]
fn failures_leave_the_evaluator_untouched() {
    let mut evaluator = Evaluator::new();
    evaluator.set_angle_mode(AngleMode::degrees);
    assert!(evaluator.evaluate(&parse("ln(0)").unwrap()).is_err());
    assert!(evaluator.evaluate(&parse("unknown").unwrap()).is_err());
    assert_eq!(evaluator.angle_mode(), AngleMode::degrees);
    assert_eq!(evaluator.constants().get("PI"), Some(PI));
}

#[test]
fn same_tree_same_bits() {
    let evaluator = Evaluator::new();
    let expression = parse("tan(1.2) ^ 0.5 - log2(7) * exp(-1.5)").unwrap();
    let first = evaluator.evaluate(&expression).unwrap();
    let second = evaluator.evaluate(&expression).unwrap();
    assert_eq!(first.to_bits(), second.to_bits());
}
