use anyhow::Result;

use runargs_core::config::keys;

pub fn keys_command() -> Result<()> {
    for key in keys::ALL {
        println!("{key}");
    }
    Ok(())
}
