use clap::Parser;
use evlegend::{Cli, Config, LegendApp};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let app = LegendApp::new(Config::from(&cli))?;
    app.run(cli.command)
}
