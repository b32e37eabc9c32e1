use anyhow::Result;
use clap::Parser;
use std::fs;
use std::path::PathBuf;

use changelog_gen::filter::{FilterFamily, FilterSet};
use changelog_gen::pipeline::{self, ChangelogRequest};
use changelog_gen::resolver::RangeMode;
use changelog_gen::source::{CommitSource, FileSource};
use changelog_gen::{config, ui};

#[derive(clap::Parser)]
#[command(
    name = "changelog-gen",
    about = "Generate a markdown changelog between two release tags"
)]
struct Args {
    #[arg(short, long, help = "Repository full name, e.g. acme/widget")]
    repo: String,

    #[arg(long, help = "TOML file with the repository's tags, newest first")]
    tags: String,

    #[arg(long, help = "TOML file with the commits for the selected range")]
    commits: Option<String>,

    #[arg(
        short,
        long,
        help = "Tag to diff against its previous release (automatic mode)"
    )]
    tag: Option<String>,

    #[arg(long, help = "Older endpoint of a manual range")]
    from: Option<String>,

    #[arg(long, help = "Newer endpoint of a manual range")]
    to: Option<String>,

    #[arg(long, help = "Exclude feat/feature commits")]
    no_feat: bool,

    #[arg(long, help = "Exclude fix commits")]
    no_fix: bool,

    #[arg(long, help = "Exclude chore/refactor/style/test commits")]
    no_chore: bool,

    #[arg(long, help = "Exclude docs commits")]
    no_docs: bool,

    #[arg(long, help = "Exclude merge commits")]
    no_merge: bool,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Show the supplied tag list and exit")]
    list_tags: bool,

    #[arg(short, long, help = "Write the changelog to a file instead of stdout")]
    output: Option<String>,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("changelog-gen {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    let source = FileSource::new(&args.tags, args.commits.clone().map(PathBuf::from));

    if args.list_tags {
        let tags = match source.list_tags() {
            Ok(tags) => tags,
            Err(e) => {
                ui::display_error(&format!("Failed to read tags: {}", e));
                std::process::exit(1);
            }
        };
        ui::display_tag_list(&tags);
        return Ok(());
    }

    // Determine the range mode from the flags
    let mode = if let Some(tag) = args.tag.clone() {
        RangeMode::Auto { tag }
    } else if args.from.is_some() || args.to.is_some() {
        RangeMode::Manual {
            from: args.from.clone().unwrap_or_default(),
            to: args.to.clone().unwrap_or_default(),
        }
    } else {
        ui::display_error("Select a range: --tag for automatic mode, or --from/--to for manual");
        std::process::exit(1);
    };

    if args.commits.is_none() {
        ui::display_error("A --commits file is required to generate a changelog");
        std::process::exit(1);
    }

    // Config supplies the defaults; flags only ever switch families off
    let filters = apply_flag_overrides(config.filters.to_filter_set(), &args);

    let request = ChangelogRequest {
        repo_full_name: args.repo.clone(),
        mode,
        filters,
    };

    let document = match pipeline::run(&source, &request) {
        Ok(doc) => doc,
        Err(err) => match pipeline::fallback_document(&args.repo, &err) {
            Some(doc) => {
                ui::display_status(&err.to_string());
                doc
            }
            None => {
                ui::display_error(&err.to_string());
                std::process::exit(1);
            }
        },
    };

    match args.output {
        Some(path) => {
            fs::write(&path, &document)?;
            ui::display_success(&format!("Changelog written to {}", path));
        }
        None => println!("{}", document),
    }

    Ok(())
}

fn apply_flag_overrides(mut filters: FilterSet, args: &Args) -> FilterSet {
    if args.no_feat {
        filters = filters.disable(FilterFamily::Feat);
    }
    if args.no_fix {
        filters = filters.disable(FilterFamily::Fix);
    }
    if args.no_chore {
        filters = filters.disable(FilterFamily::Chore);
    }
    if args.no_docs {
        filters = filters.disable(FilterFamily::Docs);
    }
    if args.no_merge {
        filters = filters.disable(FilterFamily::Merge);
    }
    filters
}
