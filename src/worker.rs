//! src/worker.rs

use crate::address::hex_to_tron_address;
use crate::error::ConvertError;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};
use tracing::debug;

/// The outcome of converting one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub input: String,
    pub result: Result<Option<String>, ConvertError>,
}

/// Converts batches of hex addresses on a dedicated rayon pool.
///
/// Every conversion rents its own hasher from the shared digest pool, so
/// workers never hash through the same `Sha256` at once.
pub struct BatchConverter {
    pool: ThreadPool,
}

impl BatchConverter {
    pub fn new(num_threads: usize) -> Result<Self, ThreadPoolBuildError> {
        let pool = ThreadPoolBuilder::new().num_threads(num_threads).build()?;
        debug!(threads = pool.current_num_threads(), "batch converter ready");
        Ok(Self { pool })
    }

    pub fn num_threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Converts every input. Results come back in input order.
    pub fn convert_all<S: AsRef<str> + Sync>(&self, inputs: &[S]) -> Vec<Conversion> {
        self.pool.install(|| {
            inputs
                .par_iter()
                .map(|input| {
                    let input = input.as_ref();
                    Conversion {
                        input: input.to_string(),
                        result: hex_to_tron_address(input),
                    }
                })
                .collect()
        })
    }
}
