//! # Languages Subcommand
//!
//! Prints the language codes accepted by `tweetq search --lang`.

use anyhow::Result;
use clap::Args;

use tweetq_core::Language;

/// Arguments for the `tweetq languages` subcommand.
#[derive(Args, Debug)]
pub struct LanguagesArgs {
    /// Only list codes starting with this prefix.
    #[arg(long)]
    pub prefix: Option<String>,
}

/// Execute the languages subcommand. Always returns exit code 0.
pub fn run_languages(args: &LanguagesArgs) -> Result<u8> {
    for line in language_lines(args.prefix.as_deref()) {
        println!("{line}");
    }
    Ok(0)
}

/// `code<TAB>Name` for every defined language matching `prefix`.
fn language_lines(prefix: Option<&str>) -> Vec<String> {
    let prefix = prefix.unwrap_or("").to_ascii_lowercase();
    Language::defined()
        .iter()
        .filter(|lang| lang.code().starts_with(&prefix))
        .map(|lang| format!("{}\t{lang:?}", lang.code()))
        .collect()
}
