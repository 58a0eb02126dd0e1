//! Word Sieve CLI
//!
//! Interactive command-line front end for the constraint engine, plus a
//! one-shot `query` mode for scripting.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::debug;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use word_sieve::dictionary::{loader_for_path, DictionaryLoader, EmbeddedLoader};
use word_sieve::{
    DictionaryHandle, DictionaryState, Disabled, Engine, EngineConfig, EvalError, Field,
    FieldEdit, Outcome,
};

const BANNER_TEXT: &str = include_str!("text/banner.txt");

#[derive(Parser, Debug)]
#[command(name = "word-sieve", version, about = "Find every word that fits what you know")]
struct Cli {
    /// Dictionary file: a JSON array of words, or a plain word list
    #[arg(short, long, value_name = "FILE", global = true)]
    dict: Option<PathBuf>,

    /// JSON config file with min_length, max_length and default_length
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Initial target word length
    #[arg(short, long, global = true)]
    length: Option<usize>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a single query and print the matching words
    Query {
        /// Letters known to be in the word
        #[arg(short, long, default_value = "")]
        known: String,

        /// Letters known not to be in the word
        #[arg(short = 'x', long, default_value = "")]
        dead: String,

        /// Positional pattern, e.g. 'a?(pb)le'
        #[arg(short, long, default_value = "")]
        pattern: String,
    },
}

struct Spinner {
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Spinner {
    fn new(message: &'static str) -> Self {
        let running = Arc::new(AtomicBool::new(true));
        let running_clone = running.clone();
        let handle = thread::spawn(move || {
            let frames = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
            let mut i = 0;
            let mut stderr = io::stderr();
            while running_clone.load(Ordering::Relaxed) {
                let _ = write!(stderr, "\r{} {}", frames[i % frames.len()], message);
                let _ = stderr.flush();
                thread::sleep(Duration::from_millis(80));
                i += 1;
            }
            let _ = write!(stderr, "\r{}\r", " ".repeat(message.len() + 3));
            let _ = stderr.flush();
        });
        Self {
            running,
            handle: Some(handle),
        }
    }

    fn stop(mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
    }
}

fn load_config(cli: &Cli) -> Result<EngineConfig> {
    let config = match &cli.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => EngineConfig::default(),
    };
    Ok(match cli.length {
        Some(length) => config.with_default_length(length),
        None => config,
    })
}

fn dictionary_loader(cli: &Cli, config: EngineConfig) -> Box<dyn DictionaryLoader> {
    match &cli.dict {
        Some(path) => loader_for_path(path, config),
        None => Box::new(EmbeddedLoader::new(config)),
    }
}

fn print_words(words: &[String]) {
    for (i, word) in words.iter().enumerate() {
        if i > 0 && i % 8 == 0 {
            println!();
        }
        print!("{:>12}", word);
    }
    println!();
}

fn print_status(engine: &mut Engine) {
    let constraints = engine.constraints().clone();
    println!();
    println!("  Length:  {}", constraints.length);
    println!("  Known:   {}", constraints.known);
    println!("  Dead:    {}", constraints.dead);
    println!("  Pattern: {}", constraints.pattern);
    match engine.readiness() {
        Ok(dictionary) => println!("  Ready to search {} words.", dictionary.len()),
        Err(reason) => println!("  Search unavailable: {}", reason),
    }
    println!();
}

fn report_evaluation(engine: &mut Engine) {
    match engine.evaluate() {
        Ok(Outcome::Matches(words)) => {
            println!();
            println!("Found {} matches:", words.len());
            print_words(words);
            println!();
        }
        Ok(Outcome::NoMatches) => println!("No matches found."),
        Ok(Outcome::NotRun) => {}
        Err(EvalError::Disabled(Disabled::DictionaryLoading)) => {
            println!("The dictionary is still loading, try again in a moment.")
        }
        Err(err) => println!("Cannot search: {}", err),
    }
}

fn run_interactive(mut engine: Engine) -> Result<()> {
    for line in BANNER_TEXT.lines().take(5) {
        println!("{}", line);
    }
    println!();
    println!("Type 'help' for commands.");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush().context("failed to flush stdout")?;

        let mut line = String::new();
        if stdin
            .lock()
            .read_line(&mut line)
            .context("failed to read stdin")?
            == 0
        {
            break;
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (command, arg) = line
            .split_once(char::is_whitespace)
            .map(|(c, a)| (c, a.trim()))
            .unwrap_or((line, ""));

        match command.to_lowercase().as_str() {
            "help" | "h" | "?" => println!("{}", BANNER_TEXT),
            "quit" | "exit" | "q" => {
                println!("Goodbye!");
                break;
            }
            "length" | "len" | "l" => match engine.edit(Field::Length, arg) {
                FieldEdit::Accepted => println!("Length: {}", engine.constraints().length),
                FieldEdit::Rejected(rejection) => {
                    println!("Rejected: {}", rejection);
                    println!("Usage: length <number>");
                }
            },
            "known" | "k" => {
                engine.edit_known(arg);
                println!("Known: {}", engine.constraints().known);
            }
            "dead" | "d" => {
                engine.edit_dead(arg);
                println!("Dead: {}", engine.constraints().dead);
            }
            "pattern" | "p" => match engine.edit_pattern(arg) {
                FieldEdit::Accepted => {
                    println!("Pattern: {}", engine.constraints().pattern);
                    if let Err(reason) = engine.constraints().check_pattern_length() {
                        println!("Note: {}", reason);
                    }
                }
                FieldEdit::Rejected(rejection) => {
                    println!("Rejected: {}", rejection);
                    println!("Search is disabled until the pattern is fixed or cleared.");
                }
            },
            "show" | "go" | "s" => report_evaluation(&mut engine),
            "status" | "st" => print_status(&mut engine),
            "clear" | "reset" => {
                engine.clear();
                println!("Cleared. Length is still {}.", engine.constraints().length);
            }
            _ => {
                println!("Unknown command: {}", command);
                println!("Type 'help' for available commands.");
            }
        }
    }

    Ok(())
}

fn run_query(mut engine: Engine, known: &str, dead: &str, pattern: &str) -> Result<ExitCode> {
    let spinner = Spinner::new("Loading dictionary...");
    let state = engine.wait_for_dictionary().clone();
    spinner.stop();
    if let DictionaryState::Failed(err) = state {
        eprintln!("error: {}", err);
        return Ok(ExitCode::FAILURE);
    }

    engine.edit_known(known);
    engine.edit_dead(dead);
    if let FieldEdit::Rejected(rejection) = engine.edit_pattern(pattern) {
        eprintln!("error: {}", rejection);
        return Ok(ExitCode::FAILURE);
    }
    debug!("query constraints: {:?}", engine.constraints());

    match engine.evaluate() {
        Ok(outcome) => {
            if let Outcome::NoMatches = outcome {
                eprintln!("No matches found.");
            }
            for word in outcome.words() {
                println!("{}", word);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(EvalError::Disabled(reason)) => {
            eprintln!("error: {}", reason);
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(err).context("evaluation failed"),
    }
}

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    debug!("command line: {:?}", cli);

    let config = load_config(&cli)?;
    let handle = DictionaryHandle::spawn(dictionary_loader(&cli, config));
    let engine = Engine::with_pending(config, handle);

    match &cli.command {
        Some(Command::Query {
            known,
            dead,
            pattern,
        }) => run_query(engine, known, dead, pattern),
        None => {
            run_interactive(engine)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
