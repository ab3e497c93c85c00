use crate::{save_png, Scaler};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub const DPI_LABEL: [&str; 5] = ["mdpi", "hdpi", "xhdpi", "xxhdpi", "xxxhdpi"];

pub const DPI_SIZE: [u32; 5] = [48, 72, 96, 144, 192];

pub const IC_LAUNCHER: &str = "ic_launcher.png";

pub const IC_LAUNCHER_ROUND: &str = "ic_launcher_round.png";

/// Android screen density buckets used for launcher icons.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Density {
    Mdpi,
    Hdpi,
    Xhdpi,
    Xxhdpi,
    Xxxhdpi,
}

impl Density {
    pub const ALL: [Density; 5] = [
        Self::Mdpi,
        Self::Hdpi,
        Self::Xhdpi,
        Self::Xxhdpi,
        Self::Xxxhdpi,
    ];

    fn index(self) -> usize {
        match self {
            Self::Mdpi => 0,
            Self::Hdpi => 1,
            Self::Xhdpi => 2,
            Self::Xxhdpi => 3,
            Self::Xxxhdpi => 4,
        }
    }

    pub fn label(self) -> &'static str {
        DPI_LABEL[self.index()]
    }

    /// Launcher icon side in pixels.
    pub fn size(self) -> u32 {
        DPI_SIZE[self.index()]
    }

    pub fn dir_name(self) -> String {
        mipmap_dir(self.label())
    }
}

impl std::fmt::Display for Density {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Density {
    type Err = anyhow::Error;

    fn from_str(density: &str) -> Result<Self> {
        Ok(match density {
            "mdpi" => Self::Mdpi,
            "hdpi" => Self::Hdpi,
            "xhdpi" => Self::Xhdpi,
            "xxhdpi" => Self::Xxhdpi,
            "xxxhdpi" => Self::Xxxhdpi,
            _ => anyhow::bail!("unsupported density {}", density),
        })
    }
}

/// The standard launcher icon table as `(label, size)` pairs.
pub fn default_sizes() -> Vec<(&'static str, u32)> {
    DPI_LABEL.into_iter().zip(DPI_SIZE).collect()
}

fn mipmap_dir(label: &str) -> String {
    format!("mipmap-{}", label)
}

/// Writes `ic_launcher.png` and `ic_launcher_round.png` for every entry of
/// `sizes` into `res/mipmap-<label>`, returning the written paths.
///
/// Stops at the first error. Files written for earlier entries are left in
/// place.
pub fn mipmap_ic_launcher<I, R, L>(icon: I, res: R, sizes: &[(L, u32)]) -> Result<Vec<PathBuf>>
where
    I: AsRef<Path>,
    R: AsRef<Path>,
    L: AsRef<str>,
{
    let res = res.as_ref();
    let _span = tracing::info_span!("mipmap_ic_launcher", res = %res.display()).entered();
    std::fs::create_dir_all(res).with_context(|| format!("failed to create {}", res.display()))?;
    let scaler = Scaler::open(icon)?;
    let mut written = Vec::with_capacity(sizes.len() * 2);
    for (label, size) in sizes {
        let (label, size) = (label.as_ref(), *size);
        anyhow::ensure!(size > 0, "invalid size 0 for {}", label);
        let dir = res.join(mipmap_dir(label));
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
        let img = scaler.resize(size);
        for name in [IC_LAUNCHER, IC_LAUNCHER_ROUND] {
            let path = dir.join(name);
            save_png(&img, &path)?;
            written.push(path);
        }
        tracing::info!("wrote {} {}x{}", dir.display(), size, size);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn density_table() {
        let sizes: Vec<_> = Density::ALL.iter().map(|d| d.size()).collect();
        assert_eq!(sizes, [48, 72, 96, 144, 192]);
        assert_eq!(Density::Xxxhdpi.dir_name(), "mipmap-xxxhdpi");
        assert_eq!(default_sizes()[1], ("hdpi", 72));
    }

    #[test]
    fn density_from_str() {
        for density in Density::ALL {
            assert_eq!(density.to_string().parse::<Density>().unwrap(), density);
        }
        assert!("ldpi".parse::<Density>().is_err());
    }
}
