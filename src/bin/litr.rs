use litr::{
    config,
    ux::{self, args::Args},
};

fn main() {
    if let Err(e) = run(ux::args::app().get_matches()) {
        eprintln!("{:#}", e);
        std::process::exit(1)
    }
}

fn run(matches: clap::ArgMatches) -> anyhow::Result<()> {
    let args = Args::parse(&matches)?;
    if !args.colour {
        colored::control::set_override(false);
    }
    ux::log::init(args.colour)?;

    let config = args.load_config()?;
    if args.dump_config {
        dump_config(&config)
    } else {
        run_prompt(config, args)
    }
}

fn dump_config(config: &config::Config) -> anyhow::Result<()> {
    println!("{}", config.to_string()?);
    Ok(())
}

fn run_prompt(config: config::Config, args: Args) -> anyhow::Result<()> {
    let mut prompt = ux::prompt::Editor::new()?;
    let mut controller = ux::Controller::new(config, args.repository);
    controller.run(&mut prompt, std::io::stdout())?;
    Ok(())
}
