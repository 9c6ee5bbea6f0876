use anyhow::{bail, Context};
use clap::Parser;
use ewor_textgen::bf::BF;
use ewor_textgen::errors::Result;
use ewor_textgen::{emit_with, EmitOptions, Op};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "ewor_textgen")]
#[command(about = "Turn an ASCII text file into a Brainfuck program that prints it")]
struct Args {
    /// Text file to encode, `-` or nothing for stdin
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Where to write the program, stdout when omitted
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Drop carriage returns before encoding
    #[arg(long, action = clap::ArgAction::SetTrue)]
    strip_cr: bool,

    /// Run the generated program and compare its output with the input
    #[arg(long, action = clap::ArgAction::SetTrue)]
    check: bool,

    /// Log more, can be repeated
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .init();
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("Error reading file {}", path.display())),
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Error reading stdin")?;
            Ok(text)
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let text = read_input(args.input.as_ref())?;
    let options = EmitOptions {
        strip_cr: args.strip_cr,
    };
    let program = emit_with(&text, &options)?;
    info!(
        input = text.len(),
        program = program.len(),
        loops = program.count(Op::Open),
        "generated program"
    );

    let code = program.to_string();

    if args.check {
        let mut bf = BF::new(&code);
        bf.run().context("Generated program failed to run")?;
        let expected: Vec<u8> = if options.strip_cr {
            text.bytes().filter(|&b| b != b'\r').collect()
        } else {
            text.as_bytes().to_vec()
        };
        if bf.output() != expected.as_slice() {
            bail!("Generated program does not reproduce the input");
        }
        debug!("check passed");
    }

    match &args.output {
        Some(path) => {
            fs::write(path, &code)
                .with_context(|| format!("Error writing file {}", path.display()))?;
            info!(path = %path.display(), "written program");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(code.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}
