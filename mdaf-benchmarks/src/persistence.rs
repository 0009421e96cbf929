//! Binary persistence of objective-function state.
//!
//! The saved artifact captures everything needed to reproduce evaluation
//! behavior: formula id, bounds, optima, parameters, shift, noise, and
//! the call counter. The formula itself is re-resolved through the
//! registry on load, so the artifact carries values only.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use mdaf_functions::Parameters;

use crate::error::Result;
use crate::objective::ObjectiveFunction;
use crate::snapshot::Noise;

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct SavedState {
    pub(crate) formula: String,
    pub(crate) ndim: usize,
    pub(crate) bounds: Vec<(f64, f64)>,
    pub(crate) optimum_positions: Option<Vec<Vec<f64>>>,
    pub(crate) optimum_value: Option<f64>,
    pub(crate) parameters: Parameters,
    pub(crate) shift: Vec<f64>,
    pub(crate) noise: Noise,
    pub(crate) call_count: u64,
}

impl ObjectiveFunction {
    /// Saves the full objective-function state to an opaque binary file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let writer = BufWriter::new(File::create(path)?);
        bincode::serialize_into(writer, &self.to_saved())?;
        log::info!("objective function state saved to {}", path.display());
        Ok(())
    }

    /// Restores an objective function saved with [`ObjectiveFunction::save`].
    ///
    /// The formula id is resolved through this process's registry and the
    /// saved state is revalidated, so a tampered or stale artifact fails
    /// instead of producing an inconsistent instance.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);
        let state: SavedState = bincode::deserialize_from(reader)?;
        let objective = ObjectiveFunction::from_saved(state)?;
        log::info!("objective function state loaded from {}", path.display());
        Ok(objective)
    }
}
