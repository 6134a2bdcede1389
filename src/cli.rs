use clap::{value_parser, Arg, ArgAction, Command};
use std::path::PathBuf;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "punnett";

    pub const CROSS_CMD: &str = "cross";
    pub const RANDOM_CMD: &str = "random";
    pub const TRAITS_CMD: &str = "traits";
    pub const BATCH_CMD: &str = "batch";

    pub const DEFAULT_TRAIT: &str = "Eye Color";
}

use consts::*;

fn catalog_arg() -> Arg {
    Arg::new("catalog")
        .long("catalog")
        .short('c')
        .value_parser(value_parser!(PathBuf))
        .help("TOML file defining the trait catalog (default: built-in traits)")
}

fn trait_arg() -> Arg {
    Arg::new("trait")
        .long("trait")
        .short('t')
        .action(ArgAction::Append)
        .default_value(DEFAULT_TRAIT)
        .help("Trait to cross; give twice for a dihybrid cross")
}

fn svg_arg() -> Arg {
    Arg::new("svg")
        .long("svg")
        .value_parser(value_parser!(PathBuf))
        .help("Also draw the Punnett square to this SVG file")
}

pub fn create_cross_cli() -> Command {
    Command::new(CROSS_CMD)
        .about("Cross two parental genotypes and print the Punnett square.")
        .arg(
            Arg::new("parent1")
                .required(true)
                .help("Genotype of parent 1, dominant allele first (e.g. Bb)"),
        )
        .arg(
            Arg::new("parent2")
                .required(true)
                .help("Genotype of parent 2, dominant allele first (e.g. Bb)"),
        )
        .arg(trait_arg())
        .arg(svg_arg())
        .arg(catalog_arg())
}

pub fn create_random_cli() -> Command {
    Command::new(RANDOM_CMD)
        .about("Cross two randomly generated parents.")
        .arg(trait_arg())
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_parser(value_parser!(u64))
                .help("Seed for the random parents"),
        )
        .arg(svg_arg())
        .arg(catalog_arg())
}

pub fn create_traits_cli() -> Command {
    Command::new(TRAITS_CMD)
        .about("List the traits available for crossing.")
        .arg(catalog_arg())
}

pub fn create_batch_cli() -> Command {
    Command::new(BATCH_CMD)
        .about("Read '<parent1> <parent2>' lines from stdin and summarise each cross.")
        .arg(trait_arg())
        .arg(catalog_arg())
}

pub fn build_parser() -> Command {
    Command::new(BIN_NAME)
        .bin_name(BIN_NAME)
        .version(VERSION)
        .about("Compute Mendelian crosses (Punnett squares) for one or two traits.")
        .subcommand_required(true)
        .subcommand(create_cross_cli())
        .subcommand(create_random_cli())
        .subcommand(create_traits_cli())
        .subcommand(create_batch_cli())
}
