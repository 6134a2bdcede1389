use itertools::Itertools;
use punnett_core::extra::analysis::format_ratio;
use punnett_core::solution::CrossResult;
use punnett_core::TraitSelection;

/// `Dominant: B = Brown Eyes` / `Recessive: b = Blue Eyes` for every selected trait.
pub fn trait_info(selection: &TraitSelection) -> String {
    selection
        .iter()
        .map(|t| {
            format!(
                "{}\n  Dominant: {} = {}\n  Recessive: {} = {}",
                t.name, t.dominant_allele, t.dominant_phenotype, t.recessive_allele, t.recessive_phenotype
            )
        })
        .join("\n")
}

/// The Punnett square as a text table.
///
/// Parent 1 gametes label the rows, parent 2 gametes label the columns.
pub fn render_grid(res: &CrossResult) -> String {
    let width = res
        .offspring
        .iter()
        .map(|z| z.to_string().chars().count())
        .chain(res.gametes_a.iter().map(|g| g.to_string().chars().count()))
        .max()
        .unwrap_or(0)
        .max(2);
    let header = format!(
        "{:width$} |{}",
        "",
        res.gametes_b
            .iter()
            .map(|g| format!(" {:^width$} |", g.to_string(), width = width))
            .join(""),
        width = width
    );
    let rule = "-".repeat(width + 2 + res.n_cols() * (width + 3));
    let rows = res
        .gametes_a
        .iter()
        .zip(res.rows())
        .map(|(ga, row)| {
            format!(
                "{:>width$} |{}",
                ga.to_string(),
                row.iter()
                    .map(|z| format!(" {:^width$} |", z.to_string(), width = width))
                    .join(""),
                width = width
            )
        })
        .join("\n");
    format!("{}\n{}\n{}\n", header, rule, rows)
}

/// Phenotype percentages in first-seen order, genotype percentages by descending share and
/// the reduced phenotype ratio.
pub fn render_summary(res: &CrossResult) -> String {
    let phenotypes = &res.phenotype_counts;
    let genotypes = &res.genotype_counts;
    let phenotype_lines = phenotypes
        .iter()
        .map(|(p, _)| {
            format!(
                "  {}: {:.1}% ({})\n",
                p,
                phenotypes.percentage(p),
                phenotypes.ratio(p)
            )
        })
        .join("");
    let genotype_lines = genotypes
        .by_descending_share()
        .into_iter()
        .map(|(g, _)| {
            format!(
                "  {}: {:.1}% ({})\n",
                g,
                genotypes.percentage(g),
                genotypes.ratio(g)
            )
        })
        .join("");
    format!(
        "Phenotype Percentages:\n{}Genotype Percentages:\n{}Phenotype Ratio: {}\n",
        phenotype_lines,
        genotype_lines,
        format_ratio(phenotypes)
    )
}

/// Parents line, grid and summary together.
pub fn render_cross(res: &CrossResult) -> String {
    format!(
        "Parent 1: {}  Parent 2: {}\n\n{}\n{}",
        res.parent1,
        res.parent2,
        render_grid(res),
        render_summary(res)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use punnett_core::Engine;

    fn bb_cross() -> CrossResult {
        let engine = Engine::default();
        let sel = engine.select(&["Eye Color"]).unwrap();
        engine.cross("Bb", "Bb", &sel).unwrap()
    }

    #[test]
    fn trait_info_test() {
        let sel = Engine::default().select(&["Eye Color"]).unwrap();
        assert_eq!(
            "Eye Color\n  Dominant: B = Brown Eyes\n  Recessive: b = Blue Eyes",
            trait_info(&sel)
        );
    }

    #[test]
    fn grid_test() {
        let grid = render_grid(&bb_cross());
        let lines: Vec<&str> = grid.lines().collect();
        assert_eq!(4, lines.len());
        assert_eq!("   | B  | b  |", lines[0]);
        assert_eq!("-".repeat(14), lines[1]);
        assert_eq!(" B | BB | Bb |", lines[2]);
        assert_eq!(" b | Bb | bb |", lines[3]);
    }

    #[test]
    fn summary_test() {
        let summary = render_summary(&bb_cross());
        let expected = "Phenotype Percentages:\n  \
            Brown Eyes: 75.0% (3/4)\n  \
            Blue Eyes: 25.0% (1/4)\n\
            Genotype Percentages:\n  \
            Bb: 50.0% (2/4)\n  \
            BB: 25.0% (1/4)\n  \
            bb: 25.0% (1/4)\n\
            Phenotype Ratio: 3:1\n";
        assert_eq!(expected, summary);
    }

    #[test]
    fn dihybrid_grid_dimensions_test() {
        let engine = Engine::default();
        let sel = engine.select(&["Eye Color", "Hair Type"]).unwrap();
        let res = engine.cross("BbDd", "BbDd", &sel).unwrap();
        let grid = render_grid(&res);
        assert_eq!(6, grid.lines().count());
        assert!(grid.lines().nth(2).unwrap().starts_with("  BD | BBDD |"));
        assert!(render_cross(&res).contains("Phenotype Ratio: 9:3:3:1"));
        assert!(grid.ends_with("|\n"));
    }
}
