//! Fake converters for filesystem tests.

use crate::converter::JpegConverter;
use crate::error::ConversionFailure;
use shared_utils::common_utils::file_name_lossy;
use std::cell::Cell;
use std::collections::HashMap;
use std::path::Path;

/// Writes a JPEG of a fixed byte length per source file name.
pub struct SizedConverter {
    sizes: HashMap<String, usize>,
    calls: Cell<usize>,
}

impl SizedConverter {
    pub fn new(sizes: &[(&str, usize)]) -> Self {
        Self {
            sizes: sizes.iter().map(|(n, s)| (n.to_string(), *s)).collect(),
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl JpegConverter for SizedConverter {
    fn convert(&self, source: &Path, target: &Path) -> Result<(), ConversionFailure> {
        let name = file_name_lossy(source);
        let size = *self
            .sizes
            .get(&name)
            .ok_or_else(|| format!("no size configured for {name}"))?;
        std::fs::write(target, vec![0u8; size])?;
        self.calls.set(self.calls.get() + 1);
        Ok(())
    }
}

pub struct FailingConverter;

impl JpegConverter for FailingConverter {
    fn convert(&self, _source: &Path, target: &Path) -> Result<(), ConversionFailure> {
        std::fs::write(target, b"trunc")?;
        Err("decoder rejected the file".into())
    }
}
