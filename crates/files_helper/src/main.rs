// crates/files_helper/src/main.rs

use clap::{Arg, ArgAction, Command};

use files_helper::open_file;

fn main() {
    let matches = Command::new("open_file")
        .version("0.1.0")
        .about("Opens a file in its default application (best effort)")
        .arg(
            Arg::new("path")
                .required(true)
                .help("Path of the file to open"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose logging")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let level = if matches.get_flag("verbose") { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Some(path) = matches.get_one::<String>("path") {
        open_file(path);
    }
}
