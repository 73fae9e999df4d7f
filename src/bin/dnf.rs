use clap::Parser as _;

use dnf_rs::expression::Expression;
use dnf_rs::parser::{Parser, DEFAULT_MAX_DEPTH};

#[derive(Debug, clap::Parser)]
#[command(author, version, about = "Print the disjunctive normal form of a propositional formula")]
struct Cli {
    /// Formula, e.g. "(A & B) | !C".
    #[arg(value_name = "EXPR")]
    expression: String,

    /// Print the truth table before the DNF.
    #[clap(long)]
    table: bool,

    /// Maximum nesting depth accepted by the parser.
    #[clap(long, value_name = "INT", default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Log level.
    #[clap(long, value_name = "LEVEL", default_value = "warn")]
    log_level: simplelog::LevelFilter,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        args.log_level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;
    log::debug!("args = {:?}", args);

    let parser = Parser::with_max_depth(args.max_depth);
    let expression = Expression::parse_with(&parser, &args.expression)?;
    log::info!(
        "expression = {} (depth {}, {} nodes)",
        expression,
        expression.expr().depth(),
        expression.expr().size()
    );

    let table = expression.truth_table()?;
    if args.table {
        print!("{}", table);
    }
    log::info!(
        "{} of {} assignments are satisfying",
        table.count_satisfying(),
        table.len()
    );

    println!("{}", dnf_rs::dnf::build_dnf(table.satisfying()));

    Ok(())
}
