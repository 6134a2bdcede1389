use log::info;
use punnett_core::abstract_genetics::*;
use punnett_core::genotype::Genotype;
use punnett_core::solution::CrossResult;
use punnett_core::TraitSelection;
use std::io;
use std::path::Path;
use svg::node::element::Group;
use svg::node::element::Rectangle;
use svg::node::element::Text;
use svg::Document;

pub const BLOCKSIZE: usize = 50;
const MARGIN: usize = 40;
const LEGEND_WIDTH: usize = 260;
const LINE_HEIGHT: usize = 20;

const PALETTE: [&str; 4] = ["lightblue", "lightpink", "lightgreen", "khaki"];

pub trait Draw {
    /// Returns (width, height) of the viewBox needed to contain self.
    fn view_box_size(&self) -> Option<(usize, usize)>;

    fn draw(&self) -> Group;

    fn to_document(&self) -> Document {
        match self.view_box_size() {
            None => Document::new().add(self.draw()),
            Some((w, h)) => Document::new()
                .set("viewBox", (0, 0, w, h))
                .set("width", w)
                .set("height", h)
                .add(self.draw()),
        }
    }

    fn draw_to_file<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        svg::save(path, &self.to_document())
    }
}

/// Index of a genotype's phenotype class: one bit per trait, set when the trait is recessive.
///
/// With one trait, dominant is 0 and recessive is 1; with two traits the classes run from
/// dominant-dominant (0) to recessive-recessive (3).
fn phenotype_class(z: &Genotype, selection: &TraitSelection) -> usize {
    z.blocks().zip(selection).fold(0, |acc, (block, t)| {
        let a = Allele::from(block.contains(&t.dominant_allele));
        (acc << 1) | usize::from(!bool::from(a))
    })
}

fn cell_colour(z: &Genotype, selection: &TraitSelection) -> &'static str {
    PALETTE[phenotype_class(z, selection) % PALETTE.len()]
}

fn label(content: String, x: usize, y: usize, size: usize) -> Text {
    Text::new(content)
        .set("x", x)
        .set("y", y)
        .set("font-family", "Arial")
        .set("font-size", size)
}

/// A cross result together with the trait selection it was computed for.
pub struct PunnettSquare<'a> {
    pub result: &'a CrossResult,
    pub selection: &'a TraitSelection,
}

impl<'a> PunnettSquare<'a> {
    pub fn new(result: &'a CrossResult, selection: &'a TraitSelection) -> Self {
        Self { result, selection }
    }

    fn grid_width(&self) -> usize {
        self.result.n_cols() * BLOCKSIZE
    }

    fn grid_height(&self) -> usize {
        self.result.n_rows() * BLOCKSIZE
    }

    fn draw_cells(&self) -> Group {
        let g = Group::new().set("class", "cells");
        self.result
            .rows()
            .enumerate()
            .flat_map(|(r, row)| row.iter().enumerate().map(move |(c, z)| (r, c, z)))
            .map(|(r, c, z)| {
                let x = MARGIN + c * BLOCKSIZE;
                let y = MARGIN + r * BLOCKSIZE;
                Group::new()
                    .add(
                        Rectangle::new()
                            .set("width", BLOCKSIZE)
                            .set("height", BLOCKSIZE)
                            .set("x", x)
                            .set("y", y)
                            .set("stroke", "black")
                            .set("stroke-width", 2)
                            .set("fill", cell_colour(z, self.selection)),
                    )
                    .add(
                        label(z.to_string(), x + BLOCKSIZE / 2, y + BLOCKSIZE / 2, 10)
                            .set("font-weight", "bold")
                            .set("text-anchor", "middle")
                            .set("dominant-baseline", "middle"),
                    )
            })
            .fold(g, |d, cell| d.add(cell))
    }

    fn draw_axes(&self) -> Group {
        let rows = self.result.gametes_a.iter().enumerate().map(|(i, g)| {
            label(
                g.to_string(),
                MARGIN - 20,
                MARGIN + i * BLOCKSIZE + BLOCKSIZE / 2,
                10,
            )
            .set("text-anchor", "middle")
            .set("dominant-baseline", "middle")
        });
        let cols = self.result.gametes_b.iter().enumerate().map(|(i, g)| {
            label(
                g.to_string(),
                MARGIN + i * BLOCKSIZE + BLOCKSIZE / 2,
                MARGIN - 20,
                10,
            )
            .set("text-anchor", "middle")
            .set("dominant-baseline", "middle")
        });
        rows.chain(cols)
            .fold(Group::new().set("class", "axes"), |d, t| d.add(t))
    }

    fn draw_legend(&self) -> Group {
        let x = MARGIN + self.grid_width() + 20;
        let counts = &self.result.phenotype_counts;
        let g = Group::new().set("class", "legend").add(
            label("Phenotype Percentages:".to_owned(), x, MARGIN, 12).set("font-weight", "bold"),
        );
        counts
            .iter()
            .enumerate()
            .map(|(i, (p, _))| {
                label(
                    format!("{}: {:.1}%", p, counts.percentage(p)),
                    x,
                    MARGIN + (i + 1) * LINE_HEIGHT,
                    10,
                )
            })
            .fold(g, |d, t| d.add(t))
    }
}

impl Draw for PunnettSquare<'_> {
    fn view_box_size(&self) -> Option<(usize, usize)> {
        let legend_height = (self.result.phenotype_counts.len() + 1) * LINE_HEIGHT;
        Some((
            MARGIN + self.grid_width() + 20 + LEGEND_WIDTH,
            MARGIN + self.grid_height().max(legend_height) + MARGIN,
        ))
    }

    fn draw(&self) -> Group {
        Group::new()
            .add(self.draw_axes())
            .add(self.draw_cells())
            .add(self.draw_legend())
    }
}

/// Renders the square for `result` to an SVG file at `path`.
pub fn draw_punnett_square<P: AsRef<Path>>(
    path: P,
    result: &CrossResult,
    selection: &TraitSelection,
) -> io::Result<()> {
    PunnettSquare::new(result, selection).draw_to_file(path.as_ref())?;
    info!("Wrote Punnett square to {}", path.as_ref().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use punnett_core::Engine;

    fn cross(x: &str, y: &str, traits: &[&str]) -> (CrossResult, TraitSelection) {
        let engine = Engine::default();
        let sel = engine.select(traits).unwrap();
        (engine.cross(x, y, &sel).unwrap(), sel)
    }

    #[test]
    fn colour_follows_dominance_test() {
        let (res, sel) = cross("Bb", "Bb", &["Eye Color"]);
        let colours: Vec<&str> = res.offspring.iter().map(|z| cell_colour(z, &sel)).collect();
        assert_eq!(vec!["lightblue", "lightblue", "lightblue", "lightpink"], colours);
    }

    #[test]
    fn dihybrid_classes_test() {
        let (res, sel) = cross("BbDd", "bbdd", &["Eye Color", "Hair Type"]);
        let classes: Vec<usize> = res
            .rows()
            .map(|row| phenotype_class(&row[0], &sel))
            .collect();
        assert_eq!(vec![0, 1, 2, 3], classes);
    }

    #[test]
    fn document_contents_test() {
        let (res, sel) = cross("Bb", "bb", &["Eye Color"]);
        let square = PunnettSquare::new(&res, &sel);
        assert_eq!(Some((40 + 100 + 20 + 260, 40 + 100 + 40)), square.view_box_size());
        let doc = square.to_document().to_string();
        assert_eq!(4, doc.matches("<rect").count());
        assert!(doc.contains("Phenotype Percentages:"));
        assert!(doc.contains("Brown Eyes: 50.0%"));
        assert!(doc.contains("Blue Eyes: 50.0%"));
        assert!(doc.contains("lightpink"));
    }

    #[test]
    fn draw_to_file_test() {
        let (res, sel) = cross("BbDd", "BbDd", &["Eye Color", "Hair Type"]);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("square.svg");
        draw_punnett_square(&path, &res, &sel).unwrap();
        let s = std::fs::read_to_string(&path).unwrap();
        assert!(s.contains("<svg"));
        assert_eq!(16, s.matches("<rect").count());
    }
}
