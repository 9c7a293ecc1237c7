use std::{
    fs::read_to_string,
    io::{stderr, IsTerminal},
    path::PathBuf,
    process::ExitCode,
    rc::Rc,
    time::Instant,
};

use clap::{ArgAction, Parser};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use wi::{
    diagnostics::diagnostics::{Diagnostic, Severity},
    dump::{write_tokens, write_tree, TOKENS_DUMP_PATH, TREE_DUMP_PATH},
    errors::errors::Error,
    lexer::lexer::tokenize,
    parser::parser::parse,
};

#[derive(Parser, Debug)]
#[command(name = "wic")]
#[command(about = "Tokenize and parse a wi source file")]
struct Cli {
    /// Source file to read
    #[arg(default_value = "example.wi")]
    file: PathBuf,

    /// Write the token stream and program tree as JSON
    #[arg(short, long)]
    dump: bool,

    /// Raise log verbosity, repeat for more
    #[arg(short, action = ArgAction::Count)]
    verbose: u8,

    /// Never colour diagnostics
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    debug!("starting wic with args: {cli:?}");

    let colour = !cli.no_color && stderr().is_terminal();
    let source = read_to_string(&cli.file)?;
    let file_name = cli
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| cli.file.display().to_string());

    let start = Instant::now();
    let tokens = match tokenize(source.clone(), Some(file_name.clone())) {
        Ok(tokens) => tokens,
        Err(error) => return Ok(report(&error, &source, &file_name, colour)),
    };
    info!("tokenized in {:?}", start.elapsed());

    if cli.dump {
        write_tokens(&tokens, TOKENS_DUMP_PATH)?;
    }

    let parse_start = Instant::now();
    let program = match parse(tokens, &source, Rc::new(file_name.clone())) {
        Ok(program) => program,
        Err(error) => return Ok(report(&error, &source, &file_name, colour)),
    };
    info!("parsed in {:?}", parse_start.elapsed());

    if cli.dump {
        write_tree(&program, TREE_DUMP_PATH)?;
    }

    let summary = Diagnostic::new(
        Severity::Info,
        format!("{}: {} nodes parsed", file_name, program.len()),
    );
    println!("{}", summary.render(&source, &file_name, colour));

    Ok(ExitCode::SUCCESS)
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("wi={level},wic={level}"))),
        )
        .with_writer(stderr)
        .init();
}

fn report(error: &Error, source: &str, file_name: &str, colour: bool) -> ExitCode {
    eprintln!("{}", Diagnostic::from(error).render(source, file_name, colour));
    ExitCode::FAILURE
}
