//! Bench listing command implementation

use crate::{
    catalog::{Bench, Catalog},
    PositionFilter, Result, Team,
};

/// Handle the bench command
pub fn handle_bench(
    catalog: &Catalog,
    team: Team,
    position: &PositionFilter,
    name_query: &str,
    as_json: bool,
) -> Result<()> {
    let bench = Bench::from_catalog(catalog);
    let players: Vec<_> = bench.filtered(team, position, name_query).collect();

    if as_json {
        println!("{}", serde_json::to_string_pretty(&players)?);
        return Ok(());
    }

    println!(
        "{} bench ({} filter): {} players",
        team.display_name(),
        position,
        players.len()
    );
    for p in players {
        println!(
            "  {:<24} {:<4} {:>5.1}  ${:.1}M",
            p.name,
            p.position.as_str(),
            p.score,
            p.salary
        );
    }
    Ok(())
}
