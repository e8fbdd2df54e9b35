use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "gallery")]
#[command(about = "Browse and upload images of the gallery", long_about = None)]
pub struct Cli {
    /// Config file (TOML). Defaults to the user config directory.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List images page by page
    List(ListArgs),
    /// Host a local image and register it in the gallery
    Upload(UploadArgs),
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Number of pages to load
    #[arg(short, long, default_value_t = 1, conflicts_with = "all")]
    pub pages: usize,

    /// Load pages until the last one
    #[arg(long)]
    pub all: bool,

    /// Print the feed snapshot as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct UploadArgs {
    /// Image file (PNG, JPEG or GIF)
    pub path: PathBuf,

    #[arg(short, long)]
    pub title: String,

    #[arg(short, long)]
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_defaults_to_one_page() {
        let cli = Cli::try_parse_from(["gallery", "list"]).unwrap();
        let Commands::List(args) = cli.command else {
            panic!("expected list");
        };
        assert_eq!(args.pages, 1);
        assert!(!args.all);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_pages_conflicts_with_all() {
        assert!(Cli::try_parse_from(["gallery", "list", "--pages", "2", "--all"]).is_err());
    }

    #[test]
    fn test_upload_with_global_config() {
        let cli = Cli::try_parse_from([
            "gallery",
            "upload",
            "pic.png",
            "--title",
            "My Pic",
            "--description",
            "desc",
            "--config",
            "/tmp/gallery.toml",
        ])
        .unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("/tmp/gallery.toml")));
        let Commands::Upload(args) = cli.command else {
            panic!("expected upload");
        };
        assert_eq!(args.path, PathBuf::from("pic.png"));
        assert_eq!(args.title, "My Pic");
        assert_eq!(args.description, "desc");
    }
}
