#![deny(missing_docs)]

//! # schema-annotate
//!
//! Command line tool that injects `#[derive(utoipa::ToSchema)]` into
//! public struct/enum definitions under a types directory.
//!
//! Designed to be run with zero arguments from the collaborator's
//! repository root; all options have defaults. Re-running is safe: the
//! rewrite is idempotent.

use clap::Parser;

use crate::error::CliResult;

mod annotate;
mod error;

#[derive(Parser, Debug)]
#[clap(
    author,
    version,
    about = "Injects #[derive(utoipa::ToSchema)] into type definitions"
)]
struct Cli {
    #[clap(flatten)]
    annotate: annotate::AnnotateArgs,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();

    annotate::execute(&cli.annotate)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli_structure() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_zero_argument_defaults() {
        let cli = Cli::parse_from(["schema-annotate"]);
        assert_eq!(cli.annotate.types_dir.to_str(), Some("src/types"));
        assert!(cli.annotate.exclude.is_empty());
        assert!(!cli.annotate.json);
    }

    #[test]
    fn test_exclude_is_repeatable() {
        let cli = Cli::parse_from([
            "schema-annotate",
            "--exclude",
            "Image",
            "--exclude",
            "ImageResponse",
        ]);
        assert_eq!(cli.annotate.exclude, vec!["Image", "ImageResponse"]);
    }
}
