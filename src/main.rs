use {
  anyhow::Context,
  arguments::Arguments,
  article_cleaner::{Cleaner, CleanerOptions},
  clap::Parser,
  std::{
    fs,
    io::{self, Read},
    path::PathBuf,
    process,
  },
};

mod arguments;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn main() {
  env_logger::init();

  match Arguments::parse().run() {
    Ok(code) => process::exit(code),
    Err(error) => {
      eprintln!("error: {error}");
      process::exit(1);
    }
  }
}
