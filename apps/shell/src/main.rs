use clap::Parser;
use vf_shell::args::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = vf_shell::load_settings(&cli)?;
    let _logger = vf_shell::init_logging(&cli, &settings)?;

    vf_shell::run(&cli, &settings)?;

    Ok(())
}
