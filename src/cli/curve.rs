use std::path::PathBuf;

use clap::Parser;
use solar_as_produced::{
    core::guarantee::GuaranteeCurve,
    prelude::*,
    tables::{build_clamp_table, build_curve_table},
};

/// Where the guarantee curve comes from.
#[must_use]
#[derive(Parser)]
pub struct CurveSourceArgs {
    /// Solar guarantee curve TOML file, the built-in curve when omitted.
    #[clap(long = "curve", env = "SOLAR_GUARANTEE_CURVE")]
    pub path: Option<PathBuf>,
}

impl CurveSourceArgs {
    pub fn load(&self) -> Result<GuaranteeCurve> {
        match &self.path {
            Some(path) => GuaranteeCurve::read_from(path),
            None => {
                info!("using the built-in guarantee curve");
                Ok(GuaranteeCurve::default())
            }
        }
    }
}

#[derive(Parser)]
pub struct CurveArgs {
    #[clap(flatten)]
    source: CurveSourceArgs,

    /// Write the clamped curve to the file, for review before the next run.
    #[clap(long, conflicts_with = "init")]
    clamp: Option<PathBuf>,

    /// Write the built-in curve to the file.
    #[clap(long)]
    init: Option<PathBuf>,
}

impl CurveArgs {
    pub fn run(self) -> Result {
        if let Some(path) = self.init {
            GuaranteeCurve::default().write_to(&path)?;
            info!(path = %path.display(), "written the built-in curve");
            return Ok(());
        }

        let mut curve = self.source.load()?;
        println!("{}", build_curve_table(&curve));

        let report = curve.validate();
        if !report.is_valid() {
            println!("{}", build_clamp_table(&report.0));
        }
        match self.clamp {
            Some(path) => {
                curve.clamp();
                curve.write_to(&path)?;
                info!(path = %path.display(), "written the clamped curve, review it before use");
                Ok(())
            }
            None => Ok(report.into_result()?),
        }
    }
}
