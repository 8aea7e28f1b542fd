/// Global magic at the start of every v6 payload, zero padded to 16 bytes.
pub const V6_MAGIC: [u8; 16] = *b"PENUMBRAV6P\0\0\0\0\0";

pub const ARM7_MAGIC: [u8; 8] = *b"ARM7\0\0\0\0";
pub const ARM64_MAGIC: [u8; 8] = *b"ARM64\0\0\0";

/// Magic (16 bytes) + arm7 offset/length + arm64 offset/length (4 bytes each).
pub const V6_HEADER_SIZE: u32 = 0x20;
