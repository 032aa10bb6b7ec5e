use clap::Parser;
use protoglue_cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    protoglue_cli::init_tracing(cli.verbose);

    println!("{}", cli.run()?);
    Ok(())
}
