use clap::Parser;
use console::style;
use pgsplit_cli::Opt;

fn main() {
    // Checks for `--no-dotenv` before parsing, so that `.env` can configure logging.
    pgsplit_cli::maybe_apply_dotenv();
    pgsplit_cli::init_tracing();
    let opt = Opt::parse();

    if let Err(error) = pgsplit_cli::run(&opt) {
        eprintln!("{} {}", style("error:").bold().red(), error);
        std::process::exit(1);
    }
}
