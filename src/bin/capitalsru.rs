use anyhow::Context;
use flagcaps::{capitals, logging, overrides::Overrides, Client, Config};

fn main() -> anyhow::Result<()> {
    logging::init();
    let config = Config::default();
    let overrides = Overrides::builtin().context("loading capital overrides")?;
    let client = Client::from_config(&config)?;
    let caps = capitals::resolve(&client, &config, &overrides)?;
    capitals::write_json(&config.capitals_path, &caps)
        .with_context(|| format!("writing {}", config.capitals_path.display()))?;
    println!("saved {} capitals", caps.len());
    Ok(())
}
