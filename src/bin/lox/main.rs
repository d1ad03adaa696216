mod repl;

use std::fs;
use std::path::Path;
use std::process::exit;

use anyhow::Context;
use clap::Parser;
use clox::cli::Cli;
use clox::run;
use repl::Repl;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// `EX_DATAERR`, the status clox uses for malformed input
const EXIT_LEXICAL_ERROR: i32 = 65;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    if let Some(script) = &cli.script {
        let code = read_script(script)?;
        if run(script, &code).context("writing tokens")? {
            exit(EXIT_LEXICAL_ERROR);
        }
    } else {
        repl()?;
    }

    Ok(())
}

/// Scripts are scanned as `&str`, so the file must be valid UTF-8.
fn read_script(path: &Path) -> anyhow::Result<String> {
    let bytes = fs::read(path).with_context(|| format!("script `{}`", path.display()))?;
    String::from_utf8(bytes)
        .with_context(|| format!("script `{}` is not valid UTF-8", path.display()))
}

fn repl() -> anyhow::Result<()> {
    let mut rl = DefaultEditor::new()?;
    let mut state = Repl::default();
    loop {
        match rl.readline("> ") {
            Ok(line) => {
                rl.add_history_entry(&line)?;
                state.rep(&line)?;
            }
            Err(ReadlineError::Eof) => return Ok(()),
            Err(ReadlineError::Interrupted) => {
                eprintln!("user exit");
                exit(1);
            }
            Err(e) => return Err(e.into()),
        }
    }
}
