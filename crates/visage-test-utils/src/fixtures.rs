//! Synthetic bundle contents.

use visage_assets::MemorySource;

/// Minimal JPEG-framed bytes carrying `label` in a comment segment.
///
/// The result starts with the SOI marker and ends with EOI. It is not a
/// decodable image, which is all the loader checks for.
pub fn fake_jpeg(label: &str) -> Vec<u8> {
    let label = label.as_bytes();
    let segment_len = u16::try_from(label.len() + 2).unwrap_or(u16::MAX);

    let mut bytes = vec![0xFF, 0xD8, 0xFF, 0xFE];
    bytes.extend_from_slice(&segment_len.to_be_bytes());
    bytes.extend_from_slice(label);
    bytes.extend_from_slice(&[0xFF, 0xD9]);
    bytes
}

/// A bundle with `men` portraits under `men/` and `women` portraits under `women/`.
///
/// Files are named `NN.jpg` and their label is `"<dir>/NN"`.
pub fn fixture_source(men: usize, women: usize) -> MemorySource {
    let mut source = MemorySource::new();
    for (dir, count) in [("men", men), ("women", women)] {
        for i in 0..count {
            let label = format!("{}/{:02}", dir, i);
            source.insert(format!("{}.jpg", label), fake_jpeg(&label));
        }
    }
    source
}
