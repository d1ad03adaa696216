use std::io;
use std::path::Path;

use clox::{dump_tokens, report};

#[derive(Debug, Default)]
pub struct Repl {
    /// number of lines entered so far
    count: usize,
}

impl Repl {
    /// Scan one line of input and print its tokens.
    pub fn rep(&mut self, input: &str) -> io::Result<()> {
        self.count += 1;
        let name = format!("<repl:{}>", self.count);

        let errors = dump_tokens(input, &mut io::stdout().lock())?;
        for error in &errors {
            report(Path::new(&name), input, error)?;
        }

        if !errors.is_empty() {
            log::debug!("{name}: {} lexical error(s)", errors.len());
        }

        Ok(())
    }
}
