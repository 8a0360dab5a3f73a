use flagcaps::{flags::download_flags, logging, Client, Config};

fn main() -> anyhow::Result<()> {
    logging::init();
    let config = Config::default();
    let client = Client::from_config(&config)?;
    let summary = download_flags(&client, &config)?;
    println!("{} dir {}", summary, config.flags_dir.display());
    Ok(())
}
