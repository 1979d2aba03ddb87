use std::ops::{Deref, DerefMut};

use crate::error::assert;
use crate::limb::Limb;
use crate::Error;

/// An owning, growable array of limbs.
///
/// Growth is always fallible and reported as `ErrorKind::AllocationFailed`.
/// A failed growth leaves the buffer with its previous contents, so the owner
/// can still drop it safely.
pub struct LimbBuf {
	vec: Vec<Limb>,
}

impl LimbBuf {
	pub const MAX_LIMBS: usize = usize::MAX / Limb::BITS;
	pub const MAX_BITS: usize = Self::MAX_LIMBS * Limb::BITS;

	/// An empty buffer. Does not allocate.
	pub fn new() -> Self {
		Self { vec: Vec::new() }
	}

	/// A buffer of `n` zero limbs.
	pub fn with_len(n: usize) -> Result<Self, Error> {
		let mut buf = Self::new();
		buf.grow_to(n)?;
		Ok(buf)
	}

	pub fn len(&self) -> usize {
		self.vec.len()
	}

	pub fn is_empty(&self) -> bool {
		self.vec.is_empty()
	}

	/// Extends the buffer to `n` limbs, filling the new limbs with zeros.
	/// Existing limbs are preserved. Does nothing if the buffer already has
	/// `n` or more limbs.
	pub fn grow_to(&mut self, n: usize) -> Result<(), Error> {
		assert(n <= Self::MAX_LIMBS, || {
			Error::new_alloc_failed("Number of limbs exceeds the maximum.")
		})?;

		if n <= self.vec.len() {
			return Ok(());
		}

		self.vec
			.try_reserve_exact(n - self.vec.len())
			.map_err(|_| Error::new_alloc_failed("Cannot allocate memory."))?;
		self.vec.resize(n, Limb::ZERO);
		Ok(())
	}

	/// Appends one limb.
	pub fn push(&mut self, limb: Limb) -> Result<(), Error> {
		assert(self.vec.len() < Self::MAX_LIMBS, || {
			Error::new_alloc_failed("Number of limbs exceeds the maximum.")
		})?;

		self.vec.try_reserve(1).map_err(|_| Error::new_alloc_failed("Cannot allocate memory."))?;
		self.vec.push(limb);
		Ok(())
	}

	pub fn as_slice(&self) -> &[Limb] {
		self.vec.as_slice()
	}

	pub fn as_mut_slice(&mut self) -> &mut [Limb] {
		self.vec.as_mut_slice()
	}
}

impl Deref for LimbBuf {
	type Target = [Limb];

	fn deref(&self) -> &Self::Target {
		self.as_slice()
	}
}

impl DerefMut for LimbBuf {
	fn deref_mut(&mut self) -> &mut Self::Target {
		self.as_mut_slice()
	}
}

impl Default for LimbBuf {
	fn default() -> Self {
		Self::new()
	}
}
