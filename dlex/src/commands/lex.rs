//! Lex command implementation.
//!
//! Scans each input file and prints its tokens in the selected format.

use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use dragon_lex::{Keywords, Lexer};

use crate::commands::common::{
    error_messages, render_json, render_text, OutputFormat, PrintOptions,
};
use crate::config::Config;
use crate::error::{DlexError, Result};
use crate::source::load_source;

/// Arguments for the lex command.
#[derive(Debug, Clone, Default)]
pub struct LexArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Files to scan, `-` for stdin.
    pub input: Vec<PathBuf>,
    /// Output format, overriding the configuration.
    pub format: Option<String>,
    /// Print whitespace tokens.
    pub include_whitespace: bool,
    /// Print token byte ranges.
    pub show_spans: bool,
}

/// Lex command handler.
pub struct LexCommand {
    args: LexArgs,
    config: Config,
}

impl LexCommand {
    /// Create a new LexCommand.
    pub fn new(args: LexArgs, config: Config) -> Self {
        Self { args, config }
    }

    /// Execute the command, printing to stdout.
    pub fn run(&self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = std::io::BufWriter::new(stdout.lock());
        self.run_to(&mut out)?;
        out.flush()?;
        Ok(())
    }

    /// Execute the command, printing to `out`.
    ///
    /// With more than one input in text format, each file's tokens are
    /// preceded by a `==> path <==` header. JSON output is one array per
    /// file.
    pub fn run_to<W: Write>(&self, out: &mut W) -> Result<()> {
        let start_time = Instant::now();

        if self.args.input.is_empty() {
            return Err(DlexError::Validation(error_messages::NO_INPUT_FILES.to_string()));
        }

        let format = self.output_format()?;
        let options = self.print_options();
        let keywords = self.config.to_keywords()?;
        let with_headers = self.args.input.len() > 1 && format == OutputFormat::Text;

        tracing::debug!(
            files = self.args.input.len(),
            ?format,
            keywords = keywords.len(),
            "starting lex"
        );

        let mut total = 0;
        for (index, path) in self.args.input.iter().enumerate() {
            let source = load_source(path)?;

            if with_headers {
                if index > 0 {
                    writeln!(out)?;
                }
                writeln!(out, "==> {} <==", path.display())?;
            }

            total += self.lex_one(&source, keywords.clone(), format, options, out)?;
            tracing::info!(path = %path.display(), "lexed");
        }

        let elapsed = start_time.elapsed();
        if self.args.verbose {
            tracing::info!(
                tokens = total,
                "completed in {:.2}ms",
                elapsed.as_secs_f64() * 1000.0
            );
        }

        Ok(())
    }

    /// Scans one source and prints it, returning the number of tokens
    /// printed.
    fn lex_one<W: Write>(
        &self,
        source: &str,
        keywords: Keywords,
        format: OutputFormat,
        options: PrintOptions,
        out: &mut W,
    ) -> Result<usize> {
        let tokens = Lexer::with_keywords(source, keywords).tokenize();
        let printed = match format {
            OutputFormat::Text => render_text(&tokens, options, out)?,
            OutputFormat::Json => render_json(&tokens, options, out)?,
        };
        tracing::debug!(scanned = tokens.len(), printed, "tokens");
        Ok(printed)
    }

    /// The command-line format wins over the configured one.
    fn output_format(&self) -> Result<OutputFormat> {
        let requested = self.args.format.as_deref().unwrap_or(&self.config.format);
        OutputFormat::from_str(requested).ok_or_else(|| {
            DlexError::Validation(format!("{} {}", error_messages::UNKNOWN_FORMAT, requested))
        })
    }

    /// Flags can enable what the configuration leaves off, not the reverse.
    fn print_options(&self) -> PrintOptions {
        PrintOptions {
            include_whitespace: self.args.include_whitespace || self.config.include_whitespace,
            show_spans: self.args.show_spans || self.config.show_spans,
        }
    }
}

/// Run the lex command.
pub fn run_lex(args: LexArgs, config: Config) -> Result<()> {
    LexCommand::new(args, config).run()
}
