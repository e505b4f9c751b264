use std::io::{self, BufRead, Read, Write};

use clap::{Args, Parser, Subcommand};
use ltrc::analyze_expression;
use ltrc_eval::LtrCalculator;

#[derive(Debug, Parser)]
#[command(
    name = "ltrc",
    version,
    about = "Left-to-right arithmetic expression calculator",
    long_about = "ltrc evaluates arithmetic expressions strictly from left to right.\n\n\
        There is no operator precedence: 2 + 3 * 4 evaluates to 20, not 14.\n\
        Parentheses group as usual and are resolved innermost-first.\n\n\
        EXAMPLES:\n\
        \n  ltrc eval '2 + 3 * 4'        Evaluate an expression\n\
        \n  echo '1 + 2' | ltrc eval     Evaluate an expression from stdin\n\
        \n  ltrc json '(1 + 2) * 3'      Emit a machine-readable report\n\
        \n  ltrc repl                    Start an interactive session"
)]
struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluate an expression and print the result
    #[command(about = "Evaluate an expression and print the result")]
    Eval(EvalArgs),

    /// Evaluate an expression and print a JSON report
    #[command(about = "Evaluate an expression and print a JSON report for tooling")]
    Json(EvalArgs),

    /// Start an interactive Read-Eval-Print Loop
    #[command(
        about = "Start an interactive REPL session",
        long_about = "Start an interactive Read-Eval-Print Loop.\n\n\
            Commands:\n\
            \n  :help   Show available REPL commands\n\
            \n  :quit   Exit the REPL (also :q, :exit)"
    )]
    Repl,
}

#[derive(Debug, Args, Clone)]
struct EvalArgs {
    /// Expression to evaluate (reads from stdin if not provided)
    #[arg(value_name = "EXPR")]
    expression: Option<String>,
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let exit_code = match cli.command {
        Some(Command::Eval(args)) => run_eval(&args),
        Some(Command::Json(args)) => run_json(&args),
        Some(Command::Repl) | None => run_repl(),
    };
    std::process::exit(exit_code);
}

fn init_logger(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(level).init();
}

fn read_expression(args: &EvalArgs) -> io::Result<String> {
    match &args.expression {
        Some(expression) => Ok(expression.clone()),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn run_eval(args: &EvalArgs) -> i32 {
    let expression = match read_expression(args) {
        Ok(expression) => expression,
        Err(err) => {
            eprintln!("error: {err}");
            return 2;
        }
    };

    let calculator = LtrCalculator::new();
    match calculator.evaluate(expression.trim()) {
        Ok(value) => {
            println!("{value}");
            0
        }
        Err(err) => {
            eprintln!("error: {err}");
            1
        }
    }
}

fn run_json(args: &EvalArgs) -> i32 {
    let expression = match read_expression(args) {
        Ok(expression) => expression,
        Err(err) => {
            eprintln!("error: {err}");
            return 2;
        }
    };

    let report = analyze_expression(expression.trim());
    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            eprintln!("error: {err}");
            return 2;
        }
    }

    if report.result.is_some() {
        0
    } else {
        1
    }
}

fn run_repl() -> i32 {
    println!("ltrc — left-to-right evaluation, no operator precedence");
    println!("Type :help for commands, :quit to leave.");

    let calculator = LtrCalculator::new();
    let stdin = io::stdin();

    loop {
        print!("ltr> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break, // EOF
            Ok(_) => {}
            Err(err) => {
                eprintln!("error: {err}");
                break;
            }
        }

        match line.trim() {
            "" => continue,
            ":quit" | ":q" | ":exit" => break,
            ":help" => {
                println!(":help   Show available REPL commands");
                println!(":quit   Exit the REPL (also :q, :exit)");
            }
            expression => match calculator.evaluate(expression) {
                Ok(value) => println!("{value}"),
                Err(err) => eprintln!("error: {err}"),
            },
        }
    }

    0
}
