#![allow(non_snake_case)]

use smallvec::SmallVec;

pub mod error;
pub mod limb;
pub mod limb_buf;
pub mod ll;

pub use error::{Error, ErrorKind};
pub use limb::Limb;
pub use limb_buf::LimbBuf;

#[macro_export]
macro_rules! testvec {
	($($x:expr),* $(,)?) => {
		{
			let v: Vec<$crate::Limb> = vec![$($crate::Limb { val: $x }),*];
			v
		}
	};
}

/// An unsigned multi-precision integer.
///
/// The value is stored as little-endian limbs; the magnitude is
/// `sum(limbs[i] * 2**(Limb::BITS * i))`. Zero has two valid
/// representations: no limbs at all, and the single limb `[0]`. Operations
/// never normalize, so high zero limbs produced by a right shift stay in
/// place until the owner drops the value.
pub struct BigInt {
	limbs: LimbBuf,
}

impl BigInt {
	/// The empty zero value. Does not allocate.
	pub fn new_zero() -> Self {
		Self { limbs: LimbBuf::new() }
	}

	/// The single-limb zero value `[0]`.
	pub fn try_zero_limb() -> Result<Self, Error> {
		Ok(Self { limbs: LimbBuf::with_len(1)? })
	}

	pub fn limb_count(&self) -> usize {
		self.limbs.len()
	}

	pub fn as_limbs(&self) -> &[Limb] {
		&self.limbs
	}

	pub fn is_zero(&self) -> bool {
		self.limbs.iter().all(Limb::is_zero)
	}

	/// Converts a native unsigned integer, using the minimal number of limbs.
	/// Zero converts to the empty value.
	pub fn try_from_u64(value: u64) -> Result<Self, Error> {
		let mut limbs = LimbBuf::new();
		let mut v = value;
		while v != 0 {
			limbs.push(Limb::new(v as limb::Value))?;
			v = v.checked_shr(Limb::BITS as u32).unwrap_or(0);
		}
		Ok(Self { limbs })
	}

	/// Converts a native signed integer by reinterpreting its bits as an
	/// unsigned magnitude. A negative input is not sign-extended or negated;
	/// it simply converts as its two's-complement bit pattern.
	pub fn try_from_i64(value: i64) -> Result<Self, Error> {
		Self::try_from_u64(value as u64)
	}

	/// A deep copy with `extra_zero_limbs` zero limbs appended above the
	/// copied ones. Used to pre-size an accumulator so that repeated
	/// additions and shifts need no further growth.
	pub fn try_clone_with_extra(&self, extra_zero_limbs: usize) -> Result<Self, Error> {
		let mut limbs = LimbBuf::with_len(self.limbs.len() + extra_zero_limbs)?;
		ll::numcpy(&mut limbs, &self.limbs)?;
		Ok(Self { limbs })
	}

	/// `self += addend`, in place.
	///
	/// The limb count grows to `max(self.limb_count(), addend.limb_count())`,
	/// plus one more limb holding `1` if the addition carries out of the
	/// highest limb. Growth is monotonic; `addend` is never mutated. On
	/// failure the accumulator keeps whatever limbs it had and stays safe to
	/// drop, but its numeric value is unspecified.
	pub fn try_add_assign(&mut self, addend: &BigInt) -> Result<(), Error> {
		let new_len = self.limbs.len().max(addend.limb_count());
		self.limbs.grow_to(new_len)?;

		let carry = ll::add_assign(&mut self.limbs, addend.as_limbs())?;
		if carry {
			self.limbs.push(Limb::one())?;
		}
		Ok(())
	}

	/// Logical shift left by `bits` bits, performed as `bits` single-bit
	/// passes. The limb count does not change; bits shifted out of the
	/// highest limb are lost. An arithmetic shift left is the same
	/// operation.
	pub fn shift_left(&mut self, bits: usize) {
		for _ in 0..bits {
			ll::shl1(&mut self.limbs);
		}
	}

	/// Logical shift right by `bits` bits. Vacated high bits fill with zero.
	pub fn shift_right_logical(&mut self, bits: usize) {
		for _ in 0..bits {
			ll::shr1(&mut self.limbs, false);
		}
	}

	/// Arithmetic shift right by `bits` bits.
	///
	/// The fill bit is the top bit of the highest limb, re-read at the start
	/// of every single-bit pass. Shifting the empty value is a no-op.
	pub fn shift_right_arithmetic(&mut self, bits: usize) {
		for _ in 0..bits {
			let Some(top) = self.limbs.last() else {
				return;
			};
			let fill = top.high_bit();
			ll::shr1(&mut self.limbs, fill);
		}
	}

	/// `self * scalar`, as a new value. `self` is never mutated.
	///
	/// Binary long multiplication: a running term starts as a copy of `self`
	/// pre-grown by enough limbs to absorb every doubling, and is added into
	/// the result for each set bit of `scalar`.
	pub fn try_mul_u64(&self, scalar: u64) -> Result<BigInt, Error> {
		if scalar == 0 {
			return Self::try_zero_limb();
		}

		let extra_limbs = scalar.ilog2() as usize / Limb::BITS + 1;
		let mut running_term = self.try_clone_with_extra(extra_limbs)?;
		let mut result = Self::try_zero_limb()?;

		let mut scalar = scalar;
		while scalar != 0 {
			if scalar & 1 == 1 {
				result.try_add_assign(&running_term)?;
			}
			scalar >>= 1;
			running_term.shift_left(1);
		}

		Ok(result)
	}

	/// Writes the value in base 16: `"0x"` followed by the limbs from most
	/// to least significant, each as `Limb::NIBBLES` uppercase hex digits.
	/// High all-zero limbs are suppressed; a zero value prints as `"0x"`
	/// with no digits at all.
	pub fn print_hex(&self, sink: &mut impl std::io::Write) -> std::io::Result<()> {
		const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

		let mut text: SmallVec<[u8; 64]> = SmallVec::new();
		text.extend_from_slice(b"0x");

		let limbs = self.as_limbs();
		let zeros = limbs.iter().rev().take_while(|limb| limb.is_zero()).count();
		for limb in limbs[..limbs.len() - zeros].iter().rev() {
			for i in (0..Limb::NIBBLES).rev() {
				let nibble = (limb.val >> (4 * i)) & 0xF;
				text.push(HEX_DIGITS[nibble as usize]);
			}
		}

		sink.write_all(&text)
	}
}

impl Default for BigInt {
	fn default() -> Self {
		Self::new_zero()
	}
}

impl std::fmt::Debug for BigInt {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(self.as_limbs().iter().map(|limb| limb.val)).finish()
	}
}
