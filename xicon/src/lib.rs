use crate::config::Config;
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

pub mod config;

pub const DEFAULT_RES: &str = "app/src/main/res";

#[derive(Debug, Parser)]
#[clap(author, version, about, long_about = None)]
pub struct IconArgs {
    /// Path to the source image. Any rectangle works, it is cropped
    /// to a centered square.
    #[clap(long, short)]
    icon: Option<PathBuf>,
    /// Android resource directory receiving the `mipmap-*` folders.
    #[clap(long, short)]
    res: Option<PathBuf>,
    /// Path to a yaml file providing `icon` and `res`.
    #[clap(long, default_value = config::DEFAULT_CONFIG)]
    config: PathBuf,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IconEnv {
    icon: PathBuf,
    res: PathBuf,
}

impl IconEnv {
    pub fn new(args: IconArgs) -> Result<Self> {
        let config = Config::parse(&args.config)?;
        Self::resolve(args, config)
    }

    fn resolve(args: IconArgs, config: Config) -> Result<Self> {
        let icon = match args.icon.or(config.icon) {
            Some(icon) => icon,
            None => anyhow::bail!(
                "no icon given, pass `--icon` or set `icon` in {}",
                args.config.display()
            ),
        };
        let res = args
            .res
            .or(config.res)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_RES));
        Ok(Self { icon, res })
    }

    pub fn icon(&self) -> &PathBuf {
        &self.icon
    }

    pub fn res(&self) -> &PathBuf {
        &self.res
    }

    pub fn run(&self) -> Result<Vec<PathBuf>> {
        tracing::info!("resizing {} into {}", self.icon.display(), self.res.display());
        mipmap::android::mipmap_ic_launcher(
            &self.icon,
            &self.res,
            &mipmap::android::default_sizes(),
        )
    }
}
