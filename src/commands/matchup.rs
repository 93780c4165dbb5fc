//! Matchup command implementation

use crate::{
    catalog::Catalog,
    error::SandboxError,
    matchup::{compare, Matchup},
    Result,
};

/// Look up both players and build their comparison.
pub fn build_matchup(catalog: &Catalog, left: &str, right: &str) -> Result<Matchup> {
    let find = |name: &str| {
        catalog
            .find(name)
            .ok_or_else(|| SandboxError::PlayerNotFound {
                name: name.to_string(),
            })
    };
    compare(find(left)?, find(right)?)
}

/// Handle the matchup command
pub fn handle_matchup(catalog: &Catalog, left: &str, right: &str, as_json: bool) -> Result<()> {
    let matchup = build_matchup(catalog, left, right)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&matchup)?);
        return Ok(());
    }

    println!("{} vs {} ({}s)", matchup.left, matchup.right, matchup.kind);
    for row in &matchup.rows {
        println!("  {:<5} {:>8.3} {:>8.3}", row.metric, row.left, row.right);
    }
    println!("  axis max: {:.3}", matchup.axis_max());
    Ok(())
}
