//! Slice-level limb algorithms.
//!
//! Functions here operate on raw limb slices and know nothing about
//! ownership. Length preconditions are checked and reported as
//! `ErrorKind::BufferTooSmall`.

pub use crate::limb::Limb;
use crate::error::{assert, Error};

/// `r[..a.len()] = a`. Limbs of `r` past `a.len()` are left untouched.
#[inline]
#[must_use]
pub fn numcpy(r: &mut [Limb], a: &[Limb]) -> Result<usize, Error> {
	if a.is_empty() {
		return Ok(0);
	}

	assert(r.len() >= a.len(), || Error::new_buffer_too_small("ll::numcpy()"))?;

	r[..a.len()].copy_from_slice(a);
	Ok(a.len())
}

/// `r += b`, in place, with carry propagation through all of `r`.
///
/// `r.len()` must be at least `b.len()`; missing high limbs of `b` are
/// treated as zero. Returns the final carry out of the highest limb of `r`.
#[must_use]
pub fn add_assign(r: &mut [Limb], b: &[Limb]) -> Result<bool, Error> {
	assert(r.len() >= b.len(), || Error::new_buffer_too_small("ll::add_assign()"))?;

	let mut carry = false;
	for i in 0..b.len() {
		let (sum, overflow) = Limb::addc(r[i], b[i], carry);
		r[i] = sum;
		carry = overflow;
	}

	// Walk the carry through the rest of the accumulator.
	for i in b.len()..r.len() {
		if !carry {
			break;
		}
		let (sum, overflow) = Limb::addc(r[i], Limb::ZERO, carry);
		r[i] = sum;
		carry = overflow;
	}

	Ok(carry)
}

/// Shifts the whole slice left by one bit. The bit shifted out of the
/// highest limb is discarded.
pub fn shl1(r: &mut [Limb]) {
	let mut carry = false;
	for limb in r.iter_mut() {
		let high = limb.high_bit();
		*limb = (*limb << 1) | Limb::from_bool(carry);
		carry = high;
	}
}

/// Shifts the whole slice right by one bit. `fill` is the bit shifted into
/// the top bit of the highest limb; the bit shifted out of the lowest limb
/// is discarded.
pub fn shr1(r: &mut [Limb], fill: bool) {
	let mut carry = fill;
	for limb in r.iter_mut().rev() {
		let low = limb.low_bit();
		*limb = (*limb >> 1) | (Limb::from_bool(carry) << (Limb::BITS - 1));
		carry = low;
	}
}
