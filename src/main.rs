use log::error;

mod args;
mod discover;
mod driver;
mod error;
mod line;
mod merge;
mod source;

#[cfg(test)]
mod test_helper;

use args::Args;

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(err) = driver::run(&args) {
        error!("{:#}", err);
        std::process::exit(1);
    }
}

// RUST_LOG still takes precedence over --verbose.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}
