use punnett_core::cross::*;
use punnett_core::extra::analysis::format_ratio;
use punnett_core::solution::Phenotype;
use punnett_core::{Engine, GeneticsError, InvalidReason, TraitCatalog};

fn phenotype(components: &[&str]) -> Phenotype {
    Phenotype::new(components.iter().map(|s| s.to_string()).collect())
}

fn offspring_strings(engine: &Engine, x: &str, y: &str, traits: &[&str]) -> Vec<String> {
    let sel = engine.select(traits).unwrap();
    engine
        .cross(x, y, &sel)
        .unwrap()
        .offspring
        .iter()
        .map(|z| z.to_string())
        .collect()
}

#[test]
fn monohybrid_cross_has_four_cells() {
    let engine = Engine::default();
    let sel = engine.select(&["Eye Color"]).unwrap();
    for x in ["BB", "Bb", "bb"] {
        for y in ["BB", "Bb", "bb"] {
            let res = engine.cross(x, y, &sel).unwrap();
            assert_eq!(4, res.offspring.len());
            assert_eq!(2, res.n_rows());
            assert_eq!(2, res.n_cols());
        }
    }
}

#[test]
fn dihybrid_cross_has_sixteen_cells() {
    let engine = Engine::default();
    let sel = engine.select(&["Eye Color", "Hair Type"]).unwrap();
    let parents = ["BBDD", "BbDd", "bbdd", "BBdd", "bbDd", "BbDD"];
    for x in parents {
        for y in parents {
            let res = engine.cross(x, y, &sel).unwrap();
            assert_eq!(16, res.offspring.len());
            assert_eq!(16, res.genotype_counts.total());
            assert_eq!(16, res.phenotype_counts.total());
        }
    }
}

#[test]
fn heterozygous_eye_color() {
    let engine = Engine::default();
    let mut offspring = offspring_strings(&engine, "Bb", "Bb", &["Eye Color"]);
    offspring.sort();
    assert_eq!(vec!["BB", "Bb", "Bb", "bb"], offspring);

    let sel = engine.select(&["Eye Color"]).unwrap();
    let res = engine.cross("Bb", "Bb", &sel).unwrap();
    assert_eq!(3, res.phenotype_counts.get(&phenotype(&["Brown Eyes"])));
    assert_eq!(1, res.phenotype_counts.get(&phenotype(&["Blue Eyes"])));
    assert_eq!(2, res.phenotype_counts.len());
    assert_eq!("3/4", res.phenotype_counts.ratio(&phenotype(&["Brown Eyes"])));
    assert_eq!("3:1", format_ratio(&res.phenotype_counts));
}

#[test]
fn homozygous_eye_color() {
    let engine = Engine::default();
    assert_eq!(
        vec!["Bb", "Bb", "Bb", "Bb"],
        offspring_strings(&engine, "BB", "bb", &["Eye Color"])
    );
    let sel = engine.select(&["Eye Color"]).unwrap();
    let res = engine.cross("BB", "bb", &sel).unwrap();
    assert_eq!(
        vec![(&phenotype(&["Brown Eyes"]), 4)],
        res.phenotype_counts.iter().collect::<Vec<_>>()
    );
}

#[test]
fn dihybrid_nine_three_three_one() {
    let engine = Engine::default();
    let sel = engine.select(&["Eye Color", "Hair Type"]).unwrap();
    let res = engine.cross("BbDd", "BbDd", &sel).unwrap();
    let counts = &res.phenotype_counts;
    assert_eq!(9, counts.get(&phenotype(&["Brown Eyes", "Curly Hair"])));
    assert_eq!(3, counts.get(&phenotype(&["Brown Eyes", "Straight Hair"])));
    assert_eq!(3, counts.get(&phenotype(&["Blue Eyes", "Curly Hair"])));
    assert_eq!(1, counts.get(&phenotype(&["Blue Eyes", "Straight Hair"])));
    assert_eq!("9:3:3:1", format_ratio(counts));
    assert_eq!(9, res.genotype_counts.len());
}

#[test]
fn grid_follows_gamete_order() {
    let engine = Engine::default();
    let sel = engine.select(&["Eye Color", "Hair Type"]).unwrap();
    let res = engine.cross("BbDd", "bbdd", &sel).unwrap();
    let labels: Vec<String> = res.gametes_a.iter().map(|g| g.to_string()).collect();
    assert_eq!(vec!["BD", "Bd", "bD", "bd"], labels);
    let first_column: Vec<String> = res
        .rows()
        .map(|row| row[0].to_string())
        .collect();
    assert_eq!(vec!["BbDd", "Bbdd", "bbDd", "bbdd"], first_column);
    assert_eq!("bbdd", res.cell(3, 3).unwrap().to_string());
    assert!(res.cell(4, 0).is_none());
}

#[test]
fn length_three_genotype_is_rejected() {
    let engine = Engine::default();
    let sel = engine.select(&["Eye Color"]).unwrap();
    let err = engine.cross("BbB", "Bb", &sel).unwrap_err();
    assert_eq!(
        GeneticsError::InvalidGenotype {
            genotype: "BbB".to_owned(),
            reason: InvalidReason::WrongLength {
                expected: 2,
                actual: 3
            },
        },
        err
    );
}

#[test]
fn non_canonical_parent_is_rejected() {
    let engine = Engine::default();
    let sel = engine.select(&["Eye Color"]).unwrap();
    assert!(engine.cross("bB", "Bb", &sel).is_err());
}

#[test]
fn engine_uses_injected_catalog() {
    let catalog = TraitCatalog::new(vec![punnett_core::TraitDefinition::new(
        "Pea Color",
        'Y',
        'y',
        "Yellow Peas",
        "Green Peas",
    )])
    .unwrap();
    let engine = Engine::new(catalog);
    assert!(engine.select(&["Eye Color"]).is_err());
    let sel = engine.select(&["Pea Color"]).unwrap();
    let res = engine.cross("Yy", "yy", &sel).unwrap();
    assert_eq!(2, res.phenotype_counts.get(&phenotype(&["Green Peas"])));
    let gametes = compute_gametes(&res.parent1, &sel);
    assert_eq!(2, gametes.len());
}
