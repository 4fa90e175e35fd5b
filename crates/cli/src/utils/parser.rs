use anyhow::{Result, bail};

use runargs_core::ArgumentSet;

/// Turn the flat `KEY VALUE KEY VALUE ...` list collected from `-e` flags
/// into arguments. Later duplicates win.
pub fn parse_argument_pairs(values: &[String]) -> Result<ArgumentSet> {
    if values.len() % 2 != 0 {
        bail!("Expected KEY VALUE pairs, got an odd number of values");
    }

    Ok(values
        .chunks_exact(2)
        .map(|pair| (pair[0].clone(), pair[1].clone()))
        .collect())
}
