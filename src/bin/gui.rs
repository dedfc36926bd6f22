use clap::Parser;
use env_logger::Env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = gpudbrot::GuiArgs::parse().into_config();
    let command = gpudbrot::RunGuiCommand::new(config);

    command.execute()?;

    Ok(())
}
