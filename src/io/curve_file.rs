use std::{fmt::Debug, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    core::guarantee::{GuaranteeCurve, GuaranteeEntry},
    prelude::*,
};

/// On-disk guarantee curve: an `[[hours]]` array of tables.
#[derive(Serialize, Deserialize)]
struct CurveFile {
    hours: Vec<GuaranteeEntry>,
}

impl GuaranteeCurve {
    #[instrument(name = "Reading the guarantee curve…")]
    pub fn read_from<P: AsRef<Path> + Debug>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display()))?;
        Self::from_toml(&contents)
            .with_context(|| format!("invalid curve file `{}`", path.display()))
    }

    #[instrument(skip(self), name = "Writing the guarantee curve…")]
    pub fn write_to<P: AsRef<Path> + Debug>(&self, path: P) -> Result {
        let path = path.as_ref();
        fs::write(path, self.to_toml()?)
            .with_context(|| format!("failed to write `{}`", path.display()))?;
        Ok(())
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let file: CurveFile = toml::from_str(contents)?;
        Ok(Self::try_from_entries(file.hours)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(&CurveFile { hours: self.entries().collect() })?)
    }
}
