use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result};

use arbor_lib::prelude::*;

mod render;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Expressions to evaluate before the prompt starts.
    expressions: Vec<String>,
}

const WELCOME: &str = "Welcome to ARBOR!";
const TIP: &str = "Type an expression to evaluate it, 'help' for a rundown, or CTRL+C to exit.";
const PROMPT: &str = "ARBOR => ";
const SIDEBAR: &str = "      |  ";

fn print_arrowed(banner: &str) {
    let padded = format!(" {banner} ");
    println!("------+-{padded:-<21}->");
}

fn print_sidebarred(text: &str) {
    println!("{SIDEBAR}{text}");
}

fn help() {
    print_sidebarred("Binary operators: + - * / % ^ over decimal numbers, with parentheses.");
    print_sidebarred("Precedence: ^ before * / %, which come before + -.");
    print_sidebarred("Equal precedence resolves left to right; '2 ^ 3 ^ 2' is '(2 ^ 3) ^ 2'.");
    print_sidebarred("Each result comes with its token stream and expression tree.");
}

fn process_input(input: &str) {
    let input = input.trim();
    if input.is_empty() {
        return;
    }
    if input.eq_ignore_ascii_case("help") {
        help();
        return;
    }

    match evaluate_expression(input) {
        Ok(result) => {
            print_sidebarred(&format!("Result: {result}"));
            let tokens = tokenize(input);
            print_sidebarred(&format!("Tokens: {}", render::token_line(&tokens)));
            // Same fold as the evaluation that just succeeded; it can't fail.
            if let Ok(tree) = build_tree(&tokens) {
                for line in render::tree_lines(&tree) {
                    print_sidebarred(&line);
                }
            }
        }
        Err(err) => print_sidebarred(&format!("Error: {err}")),
    }
}

fn repl() -> Result<()> {
    let mut rl = DefaultEditor::new()?;
    #[cfg(feature = "with-file-history")]
    if rl.load_history(".arbor_history").is_err() {
        println!("No previous history.");
    }

    loop {
        let readline = rl.readline(PROMPT);
        match readline {
            Ok(line) => {
                rl.add_history_entry(line.as_str())?;
                process_input(&line);
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL+C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL+D");
                break;
            }
            Err(err) => {
                println!("Error: {err:?}");
                break;
            }
        }
    }

    #[cfg(feature = "with-file-history")]
    if let Err(err) = rl.save_history(".arbor_history") {
        eprintln!("Failed to save history file:");
        eprintln!("{err}");
    };

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    for expression in &cli.expressions {
        print_arrowed(expression);
        process_input(expression);
    }

    print_arrowed(WELCOME);
    print_sidebarred(TIP);
    repl()
}
