use anyhow::Result;
use punnett_rs::cli::{build_parser, consts::*};
use punnett_rs::handlers;

fn main() -> Result<()> {
    env_logger::init();

    let matches = build_parser().get_matches();

    match matches.subcommand() {
        Some((CROSS_CMD, matches)) => handlers::run_cross(matches)?,
        Some((RANDOM_CMD, matches)) => handlers::run_random(matches)?,
        Some((TRAITS_CMD, matches)) => handlers::run_traits(matches)?,
        Some((BATCH_CMD, matches)) => handlers::run_batch(matches)?,
        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
