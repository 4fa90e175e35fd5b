use anyhow::Result;
use tracing::debug;

pub fn tokenize_command(selectors: &str) -> Result<()> {
    let tokens = runargs_core::tokenize(selectors);
    debug!("Tokenized {:?} into {} selectors", selectors, tokens.len());

    for selector in &tokens {
        println!("{selector}");
    }
    Ok(())
}
