#![allow(nonstandard_style)]

use clap::Parser as _;
use std::io::{BufRead, Write};
use trigcalc::*;
use tracing_subscriber::EnvFilter;

#[derive(clap::Parser, Debug)]
#[command(version, about = "Evaluate arithmetic expressions with exact-looking output")]
struct Args {
    /// Start in degree mode instead of radians.
    #[arg(long)]
    degrees: bool,

    /// Evaluate a single expression and exit.
    #[arg(short, long, value_name = "EXPR")]
    eval: Option<String>,
}

fn marker(error: &CalcError) -> &'static str {
    match error.kind() {
        ErrorKind::lexical | ErrorKind::syntax => "Parse error",
        ErrorKind::math_domain => "Math error",
        ErrorKind::unknown_identifier => "Error",
    }
}

fn calculate(evaluator: &Evaluator, line: &str) -> Result<String> {
    let value = evaluator.evaluate(&parse(line)?)?;
    let mode = evaluator.angle_mode();
    let mut display = format_value(value, mode);
    if is_nice_angle(value, mode) {
        if let Some(description) = angle_description(value, mode) {
            display = format!("{} ({})", display, description);
        }
    }
    Ok(display)
}

fn prompt() -> std::io::Result<()> {
    print!("> ");
    std::io::stdout().flush()
}

fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut evaluator = Evaluator::new();
    if args.degrees {
        evaluator.set_angle_mode(AngleMode::degrees);
    }

    if let Some(expression) = args.eval {
        match calculate(&evaluator, &expression) {
            Ok(display) => println!("{}", display),
            Err(e) => {
                eprintln!("{}: {}", marker(&e), e);
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    prompt()?;
    for line in std::io::stdin().lock().lines() {
        let line = line?;
        let command = line.trim();

        match command.to_lowercase().as_str() {
            "" => {}
            "quit" | "exit" | "q" => break,
            "mode" => println!("angle mode: {}", evaluator.angle_mode()),
            "degrees" | "deg" | "radians" | "rad" => {
                if let Ok(mode) = command.parse::<AngleMode>() {
                    evaluator.set_angle_mode(mode);
                    println!("angle mode: {}", mode);
                }
            }
            "constants" => {
                for (name, value) in evaluator.constants().iter() {
                    println!("  {:<15} {}", name, format_value(value, evaluator.angle_mode()));
                }
            }
            _ => match calculate(&evaluator, command) {
                Ok(display) => println!("  = {}", display),
                Err(e) => println!("{}: {}", marker(&e), e),
            },
        }

        prompt()?;
    }
    Ok(())
}
