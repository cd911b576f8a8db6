use std::{
    fs,
    io::{self, BufRead, Write},
};

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::debug;

use commandline::Options;
use diagnostics::Reporter;

mod commandline;
mod diagnostics;
mod interpreter;
mod lexer;
mod parser;

fn main() -> Result<()> {
    let options = Options::parse();

    stderrlog::new()
        .verbosity(options.verbose)
        .init()
        .context("Failed to initialise logging")?;

    match options.script {
        Some(path) => run_file(&path),
        None => run_prompt(),
    }
}

/// Scans a script file, refusing to hand off to the parser when the scan
/// produced any diagnostics.
fn run_file(path: &str) -> Result<()> {
    let source = fs::read_to_string(path).with_context(|| format!("Failed to read '{path}'"))?;

    let mut reporter = Reporter::new();
    let tokens = lexer::scan(&source, &mut reporter);
    debug!("scanned {} token(s)", tokens.len());

    if reporter.count() > 0 {
        eprintln!("{}", reporter.render_all());
        bail!("{} lexical error(s) in '{path}'", reporter.count());
    }

    let program = parser::parse(&tokens);
    interpreter::run(&program);

    Ok(())
}

/// Reads lines from stdin until EOF, scanning each one with a fresh
/// scanner/reporter pair.
fn run_prompt() -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let mut reporter = Reporter::new();
        let tokens = lexer::scan(&line, &mut reporter);

        for token in &tokens {
            println!("{token:?}");
        }
        if reporter.count() > 0 {
            eprintln!("{}", reporter.render_all());
        }
    }

    Ok(())
}
