use homegame::cli::CLI;
use homegame::config::Config;

fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    homegame::log(&config)?;
    CLI::new(config)?.run()
}
