use clap::Parser;
use xorseq::{PatternCode, PatternTable, NATURAL_XOR, PREFIX_XOR};

/// Dump the period-16 pattern tables and the leading sequence values.
#[derive(Parser)]
struct Args {
    /// Number of leading sequence values to print
    #[clap(long, default_value_t = 32)]
    limit: u64,
}

fn rule_name(table: &PatternTable, remainder: usize) -> String {
    match table.code(remainder) {
        PatternCode::Zero => "zero".into(),
        PatternCode::Index => "index".into(),
        PatternCode::Successor => format!("index+{}", 1 + table.offset()),
        PatternCode::One => format!("{}", 1 + table.offset()),
    }
}

fn main() {
    let args = Args::parse();

    println!("rem  f-rule   g-rule");
    for r in 0..16 {
        println!(
            "{:>3}  {:<8} {}",
            r,
            rule_name(&NATURAL_XOR, r),
            rule_name(&PREFIX_XOR, r)
        );
    }

    println!();
    println!("  i     f(i)     g(i)");
    for i in 0..args.limit {
        println!(
            "{:>3} {:>8} {:>8}",
            i,
            NATURAL_XOR.evaluate_at(i),
            PREFIX_XOR.evaluate_at(i)
        );
    }
}
