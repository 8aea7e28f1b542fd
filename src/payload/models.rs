use crate::error::{PackError, PackResult};
use crate::payload::constants::{ARM7_MAGIC, ARM64_MAGIC, V6_HEADER_SIZE, V6_MAGIC};
use binrw::{BinWrite, binrw};
use std::fmt;

/// Target architecture of a payload block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Architecture {
    Arm7,
    Arm64,
}

impl Architecture {
    /// Zero padded tag written in front of the payload.
    pub fn magic(&self) -> [u8; 8] {
        match self {
            Architecture::Arm7 => ARM7_MAGIC,
            Architecture::Arm64 => ARM64_MAGIC,
        }
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Architecture::Arm7 => write!(f, "ARM7"),
            Architecture::Arm64 => write!(f, "ARM64"),
        }
    }
}

/// Header of a v6 payload container.
/// The header is 32 bytes long and uses little-endian byte order.
#[binrw]
#[brw(little)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct V6Header {
    #[br(temp, assert(magic == V6_MAGIC))]
    #[bw(calc = V6_MAGIC)]
    magic: [u8; 16],

    /// Offset of the tagged ARM7 block, always right after the header.
    pub arm7_offset: u32,

    /// Length of the tagged ARM7 block, tag included.
    pub arm7_length: u32,

    /// Offset of the tagged ARM64 block, directly following the ARM7 block.
    pub arm64_offset: u32,

    /// Length of the tagged ARM64 block, tag included.
    pub arm64_length: u32,
}

impl V6Header {
    /// Builds the offset table for two tagged blocks of the given lengths.
    pub fn for_payloads(arm7_length: u64, arm64_length: u64) -> PackResult<Self> {
        let size = (V6_HEADER_SIZE as u64)
            .saturating_add(arm7_length)
            .saturating_add(arm64_length);
        if u32::try_from(size).is_err() {
            return Err(PackError::PayloadTooLarge { size });
        }

        let arm7_offset = V6_HEADER_SIZE;
        let arm7_length = arm7_length as u32;

        Ok(Self {
            arm7_offset,
            arm7_length,
            arm64_offset: arm7_offset + arm7_length,
            arm64_length: arm64_length as u32,
        })
    }
}

/// A raw payload prefixed with the tag of its architecture.
#[derive(BinWrite, Debug, Clone, PartialEq, Eq)]
#[bw(little)]
pub struct TaggedPayload {
    #[bw(map = |architecture: &Architecture| architecture.magic())]
    pub architecture: Architecture,
    pub data: Vec<u8>,
}

impl TaggedPayload {
    pub fn new(architecture: Architecture, data: Vec<u8>) -> Self {
        Self { architecture, data }
    }

    /// Length on disk, tag included.
    pub fn size(&self) -> u64 {
        self.architecture.magic().len() as u64 + self.data.len() as u64
    }
}

#[derive(BinWrite, Debug, Clone, PartialEq, Eq)]
#[bw(little)]
pub struct V6Payload {
    pub header: V6Header,
    pub arm7: TaggedPayload,
    pub arm64: TaggedPayload,
}

impl V6Payload {
    pub fn new(arm7: Vec<u8>, arm64: Vec<u8>) -> PackResult<Self> {
        let arm7 = TaggedPayload::new(Architecture::Arm7, arm7);
        let arm64 = TaggedPayload::new(Architecture::Arm64, arm64);
        let header = V6Header::for_payloads(arm7.size(), arm64.size())?;

        Ok(Self {
            header,
            arm7,
            arm64,
        })
    }

    pub fn total_size(&self) -> u64 {
        V6_HEADER_SIZE as u64 + self.arm7.size() + self.arm64.size()
    }

    pub fn write_to<W: std::io::Write + std::io::Seek>(&self, writer: &mut W) -> PackResult<()> {
        self.write(writer)?;
        Ok(())
    }
}
