use clap::{Arg, ArgMatches, Command};
use std::path::PathBuf;

use crate::config::{Args, ConfigLayer};
use crate::error::Result;
use crate::io::{print_info, read_config_file};

fn command() -> Command {
    Command::new("static-sitemap")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate post/page sitemaps and a sitemap index for a directory of exported HTML pages.")
        .arg(
            Arg::new("source")
                .short('s')
                .long("source")
                .value_parser(clap::value_parser!(PathBuf))
                .value_name("SOURCE_DIR")
                .help("Directory of HTML files to scan (default: docs)"),
        )
        .arg(
            Arg::new("target")
                .short('t')
                .long("target")
                .value_parser(clap::value_parser!(PathBuf))
                .value_name("TARGET_DIR")
                .help("Directory that receives the generated sitemaps (default: docs/sitemap)"),
        )
        .arg(
            Arg::new("base-url")
                .short('b')
                .long("base-url")
                .value_parser(clap::value_parser!(String))
                .value_name("URL")
                .help("Absolute URL prefix for every location"),
        )
        .arg(
            Arg::new("index-file")
                .short('i')
                .long("index-file")
                .value_parser(clap::value_parser!(String))
                .value_name("FILE")
                .help("File name of the sitemap index (default: sitemap_index.xml)"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_parser(clap::value_parser!(PathBuf))
                .value_name("CONFIG_FILE")
                .help("JSON file with source, target, base_url, index_file and verbose keys"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(clap::ArgAction::SetTrue)
                .help("Enables verbose output"),
        )
}

fn cli_layer(matches: &ArgMatches) -> ConfigLayer {
    ConfigLayer {
        source: matches.get_one::<PathBuf>("source").cloned(),
        target: matches.get_one::<PathBuf>("target").cloned(),
        base_url: matches.get_one::<String>("base-url").cloned(),
        index_file: matches.get_one::<String>("index-file").cloned(),
        // An absent flag leaves the config file's choice in place.
        verbose: matches.get_flag("verbose").then_some(true),
    }
}

/// Resolves command line flags over an optional config file over the defaults.
pub fn args_from_matches(matches: &ArgMatches) -> Result<Args> {
    let cli = cli_layer(matches);

    let file = match matches.get_one::<PathBuf>("config") {
        Some(path) => read_config_file(path, cli.verbose.unwrap_or(false))?,
        None => ConfigLayer::default(),
    };

    let args = Args::resolve(cli.over(file))?;

    if args.verbose {
        print_info("Verbose mode enabled.");
        print_info(&format!("Source directory: {}", args.source.display()));
        print_info(&format!("Target directory: {}", args.target.display()));
        print_info(&format!("Base URL: {}", args.base_url));
    }

    Ok(args)
}

/// parse command line arguments
pub fn parse_args() -> Result<Args> {
    args_from_matches(&command().get_matches())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn parse(argv: &[&str]) -> Result<Args> {
        let matches = command()
            .try_get_matches_from(std::iter::once("static-sitemap").chain(argv.iter().copied()))
            .unwrap();
        args_from_matches(&matches)
    }

    #[test]
    fn no_flags_gives_defaults() {
        let args = parse(&[]).unwrap();
        assert_eq!(args.source, PathBuf::from("docs"));
        assert_eq!(args.target, PathBuf::from("docs/sitemap"));
        assert_eq!(args.index_file, "sitemap_index.xml");
    }

    #[test]
    fn flags_override_config_file() {
        let tmp = TempDir::new().unwrap();
        let config = tmp.path().join("sitemap.json");
        fs::write(
            &config,
            r#"{"source": "public", "base_url": "https://file.example", "verbose": false}"#,
        )
        .unwrap();

        let args = parse(&[
            "--config",
            config.to_str().unwrap(),
            "-b",
            "https://cli.example/",
            "-t",
            "public/sitemap",
        ])
        .unwrap();

        assert_eq!(args.source, PathBuf::from("public"));
        assert_eq!(args.target, PathBuf::from("public/sitemap"));
        assert_eq!(args.base_url, "https://cli.example");
        assert!(!args.verbose);
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope.json");
        assert!(parse(&["-c", missing.to_str().unwrap()]).is_err());
    }

    #[test]
    fn command_definition_is_valid() {
        command().debug_assert();
    }
}
