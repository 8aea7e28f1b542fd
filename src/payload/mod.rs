use crate::error::{PackError, PackResult};
use crate::payload::models::{Architecture, V6Payload};
use log::debug;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

pub mod constants;
pub mod models;

/// Packs an ARM7 and an ARM64 payload into a single v6 payload container at `output_path`.
///
/// Both inputs are read fully before the output is created, so a missing input never
/// touches an existing output file. A failure while writing leaves a truncated file behind.
pub fn pack_v6_payload(
    arm7_path: &Path,
    arm64_path: &Path,
    output_path: &Path,
) -> PackResult<()> {
    let arm7 = read_payload(Architecture::Arm7, arm7_path)?;
    let arm64 = read_payload(Architecture::Arm64, arm64_path)?;

    let payload = V6Payload::new(arm7, arm64)?;
    let header = &payload.header;
    debug!(
        "ARM7 block at 0x{:08X} (0x{:X} bytes), ARM64 block at 0x{:08X} (0x{:X} bytes)",
        header.arm7_offset, header.arm7_length, header.arm64_offset, header.arm64_length
    );

    debug!("Creating v6 payload file: {:?}", output_path);
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    payload.write_to(&mut writer)?;
    writer.flush()?;

    debug!(
        "Wrote {} bytes to {}",
        payload.total_size(),
        output_path.display()
    );
    Ok(())
}

fn read_payload(architecture: Architecture, path: &Path) -> PackResult<Vec<u8>> {
    debug!("Reading {} payload: {:?}", architecture, path);
    let data = fs::read(path).map_err(|source| PackError::InputReadError {
        architecture,
        path: path.to_path_buf(),
        source,
    })?;
    debug!("{} payload is {} bytes", architecture, data.len());
    Ok(data)
}
