//! Deskcalc - CLI Entry Point
//!
//! Commands:
//! - `deskcalc eval <tokens>...` - Feed a token sequence, print the display
//! - `deskcalc repl` - Interactive token loop on stdin
//! - `deskcalc test` - Run the built-in self-test

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "deskcalc")]
#[command(version = "0.1.0")]
#[command(about = "A token-driven desk calculator engine")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a token sequence and print the final display
    Eval {
        /// Tokens to feed, e.g. `5 + 3 =` (quote `*` in most shells)
        #[arg(allow_hyphen_values = true)]
        tokens: Vec<String>,
        /// Print the display after every token
        #[arg(short, long)]
        trace: bool,
        /// Dump the final evaluator state as JSON
        #[arg(short, long)]
        json: bool,
    },
    /// Interactive loop: tokens on stdin, display on stdout
    Repl,
    /// Run the built-in self-test
    Test,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Eval { tokens, trace, json }) => {
            eval_tokens(&tokens, trace, json);
        }
        Some(Commands::Repl) => {
            run_repl();
        }
        Some(Commands::Test) => {
            run_self_test();
        }
        None => {
            println!("Deskcalc v0.1.0");
            println!("A token-driven desk calculator engine");
            println!();
            println!("Use --help for available commands");
            println!();
            demo_numeric_primitives();
        }
    }
}

fn eval_tokens(tokens: &[String], trace: bool, json: bool) {
    use deskcalc::{Evaluator, Token};

    if tokens.is_empty() {
        eprintln!("❌ No tokens to evaluate");
        std::process::exit(1);
    }

    let mut calc = Evaluator::new();

    for text in tokens {
        let token: Token = match text.parse() {
            Ok(t) => t,
            Err(e) => {
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
        };

        calc.press(token);
        if trace {
            println!("{:>5} → {}", token.to_string(), calc.display());
        }
    }

    if json {
        match serde_json::to_string_pretty(&calc) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                eprintln!("❌ Failed to serialize state: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        println!("{}", calc.display());
    }
}

fn run_repl() {
    use deskcalc::{Evaluator, Token};
    use std::io::{self, BufRead, Write};

    println!("Deskcalc REPL — enter tokens separated by spaces, `quit` to exit");
    println!();

    let stdin = io::stdin();
    let mut calc = Evaluator::new();

    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break, // EOF
            Ok(_) => {}
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed == "quit" || trimmed == "exit" {
            break;
        }

        for text in trimmed.split_whitespace() {
            match text.parse::<Token>() {
                Ok(token) => {
                    calc.press(token);
                }
                Err(e) => {
                    println!("  {}", e);
                }
            }
        }
        println!("  {}", calc.display());
    }
}

fn demo_numeric_primitives() {
    use deskcalc::numeric;
    use deskcalc::engine::format;

    println!("━━━ Numeric Primitives Demo ━━━");
    println!();

    println!("Newton's method square root (10 fixed iterations):");
    println!("  sqrt(2)   = {}", format(numeric::sqrt(2.0).unwrap()));
    println!("  sqrt(144) = {}", format(numeric::sqrt(144.0).unwrap()));
    println!();

    println!("Maclaurin series trigonometry (arguments in degrees):");
    println!("  sin(90) = {}", format(numeric::sin_deg(90.0)));
    println!("  cos(60) = {}", format(numeric::cos_deg(60.0)));
    println!("  tan(45) = {}", format(numeric::tan_deg(45.0).unwrap()));
    println!();

    println!("Series natural logarithm and exact factorial:");
    println!("  ln(2) = {}", format(numeric::ln(2.0).unwrap()));
    println!("  10!   = {}", format(numeric::factorial(10.0).unwrap()));
    println!();

    println!("✓ Core numeric primitives working!");
}

fn run_self_test() {
    use deskcalc::{Evaluator, Token, Value};
    use deskcalc::engine::format;
    use deskcalc::numeric;

    println!("━━━ Deskcalc Self-Test ━━━");
    println!();

    let mut passed = 0;
    let mut failed = 0;

    let mut check = |name: &str, ok: bool| {
        if ok {
            println!("{}... ✓", name);
            passed += 1;
        } else {
            println!("{}... ✗", name);
            failed += 1;
        }
    };

    check(
        "Format collapses integral values",
        format(2.00000000001).to_string() == "2",
    );

    check(
        "Newton sqrt converges",
        (numeric::sqrt(2.0).unwrap() - std::f64::consts::SQRT_2).abs() < 1e-9,
    );

    check("Negative sqrt is a domain error", numeric::sqrt(-1.0).is_err());

    check(
        "Series sine at 90 degrees",
        (numeric::sin_deg(90.0) - 1.0).abs() < 1e-8,
    );

    check("Series cosine at zero is exact", numeric::cos_deg(0.0) == 1.0);

    check(
        "Factorial of 5",
        numeric::factorial(5.0) == Ok(120.0),
    );

    let run = |keys: &[&str]| -> String {
        let mut calc = Evaluator::new();
        for key in keys {
            let token: Token = key.parse().expect("self-test token");
            calc.press(token);
        }
        calc.display().to_string()
    };

    check("Sequence 5 + 3 =", run(&["5", "+", "3", "="]) == "8");
    check("Division by zero poisons display", run(&["6", "/", "0", "="]) == "Error");
    check("Unary sqrt settles against entry", run(&["9", "sqrt", "="]) == "3");
    check(
        "Eager left-to-right evaluation",
        run(&["2", "+", "3", "*", "4", "="]) == "20",
    );
    check(
        "Error value renders as the sentinel",
        Value::Error.to_string() == "Error",
    );

    println!();
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Results: {} passed, {} failed", passed, failed);

    if failed == 0 {
        println!("✓ All tests passed!");
    } else {
        std::process::exit(1);
    }
}
