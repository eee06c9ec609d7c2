//! Conversion between flat slices and lane chunks.
//!
//! `from_lane_chunks(to_lane_chunks(v)) == v` for every `v`.

use crate::simd::traits::LaneVector;

/// Split a slice into full lanes plus the remainder that does not fill one.
///
/// The remainder is borrowed from `values`.
pub fn to_lane_chunks<L: LaneVector>(values: &[L::Element]) -> (Vec<L>, &[L::Element]) {
    let chunk_count = values.len() / L::LANES;
    let mut chunks = Vec::with_capacity(chunk_count);

    for i in 0..chunk_count {
        chunks.push(L::load(&values[i * L::LANES..]));
    }

    (chunks, &values[chunk_count * L::LANES..])
}

/// Flatten lane chunks followed by a remainder back into one Vec.
pub fn from_lane_chunks<L: LaneVector>(chunks: &[L], remainder: &[L::Element]) -> Vec<L::Element> {
    let mut result = vec![L::Element::default(); chunks.len() * L::LANES + remainder.len()];

    for (i, chunk) in chunks.iter().enumerate() {
        chunk.store(&mut result[i * L::LANES..]);
    }

    let tail = chunks.len() * L::LANES;
    result[tail..].copy_from_slice(remainder);
    result
}
