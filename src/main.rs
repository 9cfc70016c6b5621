//! # chatsift CLI
//!
//! Command-line interface for the chatsift library.

use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use log::info;

use chatsift::cli::Args;
use chatsift::format::write_to_format;
use chatsift::parser::TranscriptParser;
use chatsift::{ChatsiftError, ParsedTranscript};

fn main() {
    let args = <Args as ClapParser>::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .init();

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), ChatsiftError> {
    let start = Instant::now();

    // Resolve the output format up front so a bad extension fails before parsing
    let output = match &args.output {
        Some(path) => Some((path.as_str(), args.output_format(path)?)),
        None => None,
    };

    let parser = TranscriptParser::with_config(args.parser_config());
    let transcript = parser.parse_file(Path::new(&args.input))?;
    info!(
        "parsed {} in {:.2}s",
        args.input,
        start.elapsed().as_secs_f64()
    );

    if !args.quiet {
        print_summary(&args.input, &transcript);
    }

    if let Some((path, format)) = output {
        write_to_format(&transcript, path, format)?;
        if !args.quiet {
            println!();
            println!("✅ {} written to {}", format, path);
        }
    }

    Ok(())
}

fn print_summary(input: &str, transcript: &ParsedTranscript) {
    println!("📦 chatsift v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:        {}", input);
    println!("💬 Messages:     {}", transcript.message_count);
    println!(
        "📅 Date range:   {} → {}",
        transcript.date_range.start, transcript.date_range.end
    );
    println!("👥 Participants: {}", transcript.participants.len());

    let counts = transcript.sender_counts();
    for name in &transcript.participants {
        let sent = counts.get(name.as_str()).copied().unwrap_or(0);
        println!("   {} ({})", name, sent);
    }
}
