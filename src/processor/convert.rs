//! Single-file B-deck to HURDAT2 conversion

use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::bdeck::{
    BdeckReader, StormIdentityResolver, aggregate, map_system_code, sort_chronologically,
};
use crate::config::{ConverterConfig, IdentityStrategy};
use crate::error::{Result, TrackError};
use crate::hurdat2::{Hurdat2Writer, HurdatRecord};
use crate::models::StormIdentity;

/// Result of converting one input file
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionOutcome {
    Converted {
        output_path: PathBuf,
        identity: StormIdentity,
        record_count: usize,
    },
    /// The file held no row with a usable timestamp; nothing was written
    NoData,
}

/// Converts B-deck files into single-storm HURDAT2 files
#[derive(Debug, Clone)]
pub struct ConversionDriver {
    config: ConverterConfig,
    resolver: StormIdentityResolver,
    writer: Hurdat2Writer,
    reader: BdeckReader,
}

impl ConversionDriver {
    pub fn new(config: ConverterConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            resolver: StormIdentityResolver::new(&config)?,
            writer: Hurdat2Writer::from_config(&config),
            reader: BdeckReader::new(),
            config,
        })
    }

    /// Convert one B-deck file into `<output_dir>/<id>_<name>_<count>.txt`
    pub fn convert_file(&self, input: &Path) -> Result<ConversionOutcome> {
        debug!("Converting {}", input.display());

        // A bad file name fails before the file is read
        if self.config.identity_strategy == IdentityStrategy::Filename {
            self.resolver.id_from_filename(input)?;
        }

        let (mut rows, stats) = self.reader.read_file(input)?;
        if rows.is_empty() {
            info!("No data in {}", input.display());
            return Ok(ConversionOutcome::NoData);
        }
        if stats.fields_coerced > 0 {
            debug!(
                "{} unparseable numeric fields coerced in {}",
                stats.fields_coerced,
                input.display()
            );
        }

        sort_chronologically(&mut rows);
        let identity = self.resolver.resolve(input, &rows)?;
        let track = aggregate(&rows);

        let records: Vec<HurdatRecord> = track
            .iter()
            .map(|(key, record)| {
                let status = map_system_code(&record.intensity_code, record.max_wind);
                HurdatRecord::from_aggregated(key, record, status)
            })
            .collect();

        let output_dir = &self.config.output_dir;
        std::fs::create_dir_all(output_dir).map_err(|e| TrackError::io(output_dir, e))?;

        let output_path = output_dir.join(identity.output_file_name(records.len()));
        self.writer
            .write_file(&output_path, &identity.storm_id(), &identity.name, &records)?;

        info!(
            "Wrote {} ({} records) from {}",
            output_path.display(),
            records.len(),
            input.display()
        );

        Ok(ConversionOutcome::Converted {
            output_path,
            identity,
            record_count: records.len(),
        })
    }
}
