use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::Parser;

use rexplain::{analyze_semantics, explain_structure, synthesize_pattern, token_descriptions};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Pattern to explain (example lines with --generate); reads stdin when omitted
    input: Option<String>,

    /// Treat the input as sample strings, one per line, and synthesize a pattern
    #[arg(short = 'g', long)]
    generate: bool,

    /// Also print the token-by-token table
    #[arg(short = 't', long)]
    tokens: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let input = match args.input {
        Some(input) => input,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            buffer
        }
    };

    if args.generate {
        generate(&input, args.tokens);
    } else {
        explain(input.trim(), args.tokens);
    }
    Ok(())
}

fn explain(pattern: &str, with_tokens: bool) {
    let analysis = analyze_semantics(pattern);

    println!("{}", analysis.label);
    println!();
    println!("{}", analysis.description);
    if let Some(example) = &analysis.example {
        println!();
        println!("Example value: {example}");
    }
    println!();
    println!("{}", explain_structure(pattern));

    if with_tokens {
        println!();
        print_token_table(pattern);
    }
}

fn generate(text: &str, with_tokens: bool) {
    let synthesis = synthesize_pattern(text);
    println!("{}", synthesis.explanation);

    // Feed the generated pattern back through the explain pipeline so the
    // user sees the same analysis they would get for a hand-written one.
    if let Some(pattern) = &synthesis.pattern {
        println!();
        explain(pattern, with_tokens);
    }
}

fn print_token_table(pattern: &str) {
    let rows = token_descriptions(pattern);
    if rows.is_empty() {
        println!("No tokens to display.");
        return;
    }
    let width = rows
        .iter()
        .map(|(token, _)| token.chars().count())
        .max()
        .unwrap_or(0);
    for (token, description) in &rows {
        println!("{token:<width$}  {description}");
    }
}
