use anyhow::Context;
use clap::{Args, Subcommand, ValueEnum};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use super::loader;
use crate::collections::{CollectionsResolver, ImageLookup, TemplateImages};
use crate::config::{ImageSource, ResolverConfig};
use crate::fields::FieldsResolver;
use crate::input::InputBundle;
use crate::pipeline::resolve_catalogs;

/// Where collection artwork comes from
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ImageSourceArg {
    /// Set icons from an asset pack (see --asset-url)
    AssetPack,
    /// Image URLs from the per-item schema
    Schema,
}

impl From<ImageSourceArg> for ImageSource {
    fn from(arg: ImageSourceArg) -> Self {
        match arg {
            ImageSourceArg::AssetPack => ImageSource::AssetPack,
            ImageSourceArg::Schema => ImageSource::Schema,
        }
    }
}

/// Input arguments shared by every command
#[derive(Debug, Args)]
pub struct DataArgs {
    /// Directory with items_game.json, csgo_english.json and items_schema.json
    /// (plus optional categories.json and phases.json)
    #[arg(short, long)]
    data_dir: PathBuf,

    /// Resolver config (TOML); defaults apply to missing keys
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the config's image source
    #[arg(long, value_enum)]
    image_source: Option<ImageSourceArg>,

    /// Set icon URL template with {category} and {key} placeholders
    #[arg(long)]
    asset_url: Option<String>,
}

impl DataArgs {
    fn load(&self) -> anyhow::Result<(InputBundle, ResolverConfig)> {
        let mut config = loader::load_config(self.config.as_deref())?;
        if let Some(source) = self.image_source {
            config.image_source = source.into();
        }
        let bundle = loader::load_bundle(&self.data_dir)?;
        Ok((bundle, config))
    }

    fn images(&self) -> Option<TemplateImages> {
        self.asset_url.as_deref().map(TemplateImages::new)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve the collections catalog
    Collections {
        #[command(flatten)]
        data: DataArgs,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Resolve the fields catalog (qualities, types, paints, rarities, origins)
    Fields {
        #[command(flatten)]
        data: DataArgs,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Resolve both catalogs into collections.json and fields.json
    All {
        #[command(flatten)]
        data: DataArgs,

        /// Output directory
        #[arg(short, long)]
        output_dir: PathBuf,
    },
}

impl Commands {
    /// Execute the selected command.
    ///
    /// # Errors
    /// Returns an error if reading the inputs, resolving or writing fails.
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Collections { data, output } => {
                let (bundle, config) = data.load()?;
                let images = data.images();
                let mut resolver = CollectionsResolver::new(&bundle, &config);
                if let Some(images) = &images {
                    resolver = resolver.with_images(images);
                }
                write_json(&resolver.resolve()?, output.as_deref())
            }
            Commands::Fields { data, output } => {
                let (bundle, config) = data.load()?;
                let fields = FieldsResolver::new(&bundle, &config).resolve()?;
                write_json(&fields, output.as_deref())
            }
            Commands::All { data, output_dir } => {
                let (bundle, config) = data.load()?;
                let images = data.images();
                let images = images
                    .as_ref()
                    .map(|images| images as &(dyn ImageLookup + Sync));
                let catalogs = resolve_catalogs(&bundle, &config, images)?;

                fs::create_dir_all(output_dir).with_context(|| {
                    format!("Failed to create output directory: {}", output_dir.display())
                })?;
                write_json(
                    &catalogs.collections,
                    Some(&output_dir.join("collections.json")),
                )?;
                write_json(&catalogs.fields, Some(&output_dir.join("fields.json")))
            }
        }
    }
}

/// Write pretty JSON to `output`, or to stdout when no path is given.
fn write_json<T: Serialize>(value: &T, output: Option<&Path>) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    match output {
        Some(path) => {
            fs::write(path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
