use anyhow::{Context, Result};
use clap::ArgMatches;
use itertools::Itertools;
use log::{debug, warn};
use punnett_core::cross::punnett_square;
use punnett_core::extra::analysis::format_ratio;
use punnett_core::extra::instance_generators::{parse_parents, random_genotype};
use punnett_core::solution::CrossResult;
use punnett_core::{Engine, TraitSelection};
use rand::prelude::*;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::console;
use crate::settings::load_catalog;
use crate::visualisation::draw_punnett_square;

fn engine_from_matches(matches: &ArgMatches) -> Result<Engine> {
    let path = matches.get_one::<PathBuf>("catalog");
    Ok(Engine::new(load_catalog(path.map(|p| p.as_path()))?))
}

fn selection_from_matches(engine: &Engine, matches: &ArgMatches) -> Result<TraitSelection> {
    let names: Vec<&str> = matches
        .get_many::<String>("trait")
        .map(|v| v.map(String::as_str).collect())
        .unwrap_or_default();
    Ok(engine.select(names.as_slice())?)
}

fn present<W: Write>(
    out: &mut W,
    res: &CrossResult,
    selection: &TraitSelection,
    svg: Option<&PathBuf>,
) -> Result<()> {
    writeln!(out, "{}\n", console::trait_info(selection))?;
    write!(out, "{}", console::render_cross(res))?;
    if let Some(path) = svg {
        draw_punnett_square(path, res, selection)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }
    Ok(())
}

pub fn run_cross(matches: &ArgMatches) -> Result<()> {
    cross_to(matches, &mut std::io::stdout().lock())
}

/// Crosses the two parents named on the command line and writes the report to `out`.
pub fn cross_to<W: Write>(matches: &ArgMatches, out: &mut W) -> Result<()> {
    let engine = engine_from_matches(matches)?;
    let selection = selection_from_matches(&engine, matches)?;
    let parent1 = matches
        .get_one::<String>("parent1")
        .context("parent 1 genotype is required")?;
    let parent2 = matches
        .get_one::<String>("parent2")
        .context("parent 2 genotype is required")?;

    let res = engine.cross(parent1.trim(), parent2.trim(), &selection)?;
    present(
        out,
        &res,
        &selection,
        matches.get_one::<PathBuf>("svg"),
    )
}

pub fn run_random(matches: &ArgMatches) -> Result<()> {
    random_to(matches, &mut std::io::stdout().lock())
}

/// Crosses two random parents, drawn from `--seed` when given, and writes the report to `out`.
pub fn random_to<W: Write>(matches: &ArgMatches, out: &mut W) -> Result<()> {
    let engine = engine_from_matches(matches)?;
    let selection = selection_from_matches(&engine, matches)?;
    let mut rng = match matches.get_one::<u64>("seed") {
        Some(&seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let x = random_genotype(&mut rng, &selection);
    let y = random_genotype(&mut rng, &selection);
    debug!("Random parents {} and {}", x, y);

    let res = punnett_square(x, y, &selection);
    present(
        out,
        &res,
        &selection,
        matches.get_one::<PathBuf>("svg"),
    )
}

pub fn run_traits(matches: &ArgMatches) -> Result<()> {
    let engine = engine_from_matches(matches)?;
    let mut out = std::io::stdout().lock();
    for t in engine.catalog().iter() {
        let selection = engine.select(&[t.name.as_str()])?;
        writeln!(out, "{}", console::trait_info(&selection))?;
    }
    Ok(())
}

/// Summarises one cross per input line; returns how many lines were crossed.
///
/// Lines that are malformed or hold an invalid genotype are reported and skipped.
pub fn cross_lines<R: BufRead, W: Write>(
    engine: &Engine,
    selection: &TraitSelection,
    input: R,
    out: &mut W,
) -> Result<usize> {
    let mut n = 0;
    for (i, line) in input.lines().enumerate() {
        let line = line.context("Failed to read input line")?;
        let Some((x, y)) = parse_parents(&line) else {
            if !line.trim().is_empty() && !line.trim_start().starts_with('#') {
                warn!("line {}: expected '<parent1> <parent2>', skipping", i + 1);
            }
            continue;
        };
        match engine.cross(x, y, selection) {
            Ok(res) => {
                let phenotypes = &res.phenotype_counts;
                let summary = phenotypes
                    .iter()
                    .map(|(p, _)| format!("{} {:.1}%", p, phenotypes.percentage(p)))
                    .join("; ");
                writeln!(
                    out,
                    "{} x {}\t{}\t{}",
                    x,
                    y,
                    format_ratio(phenotypes),
                    summary
                )?;
                n += 1;
            }
            Err(e) => {
                warn!("line {}: {}, skipping", i + 1, e);
                writeln!(out, "{} x {}\terror: {}", x, y, e)?;
            }
        }
    }
    Ok(n)
}

pub fn run_batch(matches: &ArgMatches) -> Result<()> {
    let engine = engine_from_matches(matches)?;
    let selection = selection_from_matches(&engine, matches)?;
    let stdin = std::io::stdin();
    let n = cross_lines(
        &engine,
        &selection,
        stdin.lock(),
        &mut std::io::stdout().lock(),
    )?;
    debug!("Crossed {} parent pairs", n);
    Ok(())
}
