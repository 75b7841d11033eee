use std::{fs, io, path::PathBuf, time::Instant};

use analyzer::{
    debug_log,
    errors::errors::Error,
    format_report,
    lexer::lexer::tokenize,
    logger::Logger,
    verifier::{
        config::{DeclarationPolicy, VerifierConfig},
        verifier::verify,
    },
};
use clap::Parser;

#[derive(Parser)]
#[command(name = "toy-analyzer")]
#[command(about = "Tokenizes a toy-language program and checks the token stream for errors.")]
#[command(version)]
struct Args {
    #[arg(help = "Source file to analyze, reads stdin when omitted")]
    path: Option<PathBuf>,

    #[arg(short, long, help = "Enable debug logging")]
    debug: bool,

    #[arg(long, help = "Render every diagnostic with a source excerpt")]
    report: bool,

    #[arg(long, help = "Declare names on sight instead of requiring an initializer")]
    bind_on_sight: bool,

    #[arg(long, default_value = "Begin", help = "Keyword the program must start with")]
    start: String,

    #[arg(long, default_value = "End", help = "Keyword the program must end with")]
    end: String,
}

impl Args {
    fn verifier_config(&self) -> VerifierConfig {
        let policy = if self.bind_on_sight {
            DeclarationPolicy::BindOnSight
        } else {
            DeclarationPolicy::RequireInitializer
        };

        VerifierConfig::default()
            .with_policy(policy)
            .with_boundaries(self.start.as_str(), self.end.as_str())
    }
}

/// Exit codes for the analyzer CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExitCode {
    /// No diagnostics
    Success = 0,
    /// Verification reported at least one diagnostic
    Diagnostics = 1,
    /// Lexical error or nothing to verify
    FatalError = 2,
    /// The source could not be read
    FileError = 3,
}

impl ExitCode {
    fn code(&self) -> i32 {
        *self as i32
    }
}

fn main() {
    let args = Args::parse();
    Logger::init(args.debug);

    std::process::exit(run(&args).code());
}

fn run(args: &Args) -> ExitCode {
    let (source, file_name) = match read_source(args.path.as_ref()) {
        Ok(read) => read,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FileError;
        }
    };

    let start = Instant::now();
    let tokens = match tokenize(source.clone(), Some(file_name)) {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(&error, &source);
            return ExitCode::FatalError;
        }
    };
    debug_log!("Tokenized in {:?}", start.elapsed());

    println!("Tokens:");
    for token in &tokens {
        println!("{}", token);
    }

    let verify_start = Instant::now();
    let diagnostics = match verify(&tokens, &args.verifier_config()) {
        Ok(diagnostics) => diagnostics,
        Err(error) => {
            display_error(&error, &source);
            return ExitCode::FatalError;
        }
    };
    debug_log!("Verified in {:?}", verify_start.elapsed());

    if diagnostics.is_empty() {
        println!("\nNo errors found");
        return ExitCode::Success;
    }

    println!("\nErrors found:");
    for diagnostic in &diagnostics {
        if args.report {
            print!(
                "{}",
                format_report(diagnostic.get_name(), &diagnostic.get_tip(), &diagnostic.position, &source)
            );
        } else {
            println!("{}", diagnostic);
        }
    }

    ExitCode::Diagnostics
}

fn read_source(path: Option<&PathBuf>) -> io::Result<(String, String)> {
    match path {
        Some(path) => {
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.to_string_lossy().into_owned());
            debug_log!("Reading {}", path.display());
            Ok((fs::read_to_string(path)?, file_name))
        }
        None => Ok((io::read_to_string(io::stdin())?, String::from("stdin"))),
    }
}

fn display_error(error: &Error, source: &str) {
    eprint!(
        "{}",
        format_report(error.get_error_name(), &error.get_tip(), error.get_position(), source)
    );
}
