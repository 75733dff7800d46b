use clap::Parser;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use serde::Serialize;
use xorseq::{
    io_utils::{io_cli_error, xorseq_cli_error},
    read_queries, Query,
};

#[derive(Serialize)]
struct ResultRow {
    #[serde(flatten)]
    query: Query,
    xor: u64,
}

/// Answer batched range XOR queries over the natural-number XOR-sum
/// sequence.
///
/// Input is a count followed by that many `start end` pairs, whitespace
/// separated, read from FILE or stdin.
#[derive(Parser)]
struct Args {
    /// Input file with the query batch; stdin when omitted
    input: Option<PathBuf>,
    /// Emit results as a JSON array instead of one line per query
    #[arg(long)]
    json: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let queries = match &args.input {
        Some(path) => {
            let file = File::open(path).map_err(|e| io_cli_error("opening", path, e))?;
            read_queries(file).map_err(|e| xorseq_cli_error("reading queries", e))?
        }
        None => read_queries(io::stdin().lock())
            .map_err(|e| xorseq_cli_error("reading queries from stdin", e))?,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        let results: Vec<ResultRow> = queries
            .iter()
            .map(|&query| ResultRow {
                query,
                xor: query.evaluate(),
            })
            .collect();
        writeln!(out, "{}", serde_json::to_string_pretty(&results)?)?;
    } else {
        for q in &queries {
            writeln!(out, "{}", q.evaluate())?;
        }
    }
    Ok(())
}
