#[cfg(limb_bits = "16")]
pub type Value = u16;

#[cfg(limb_bits = "32")]
pub type Value = u32;

#[cfg(limb_bits = "64")]
pub type Value = u64;

#[cfg(not(any(limb_bits = "16", limb_bits = "32", limb_bits = "64")))]
pub type Value = u8;

#[derive(Clone, Copy, Default, PartialEq, Debug, Eq, Ord, PartialOrd)]
pub struct Limb {
	pub val: Value,
}

impl Limb {
	pub const BITS: usize = Value::BITS as usize;
	pub const NIBBLES: usize = Self::BITS / 4;

	pub const ZERO: Limb = Self { val: 0 };
	pub const MAX: Value = Value::MAX;

	#[inline]
	pub const fn new(val: Value) -> Self {
		Self { val }
	}

	#[inline]
	pub const fn one() -> Self {
		Self { val: 1 }
	}

	#[inline]
	pub const fn from_bool(value: bool) -> Limb {
		Limb { val: value as Value }
	}

	#[inline]
	pub const fn is_zero(&self) -> bool {
		self.val == 0
	}

	#[inline]
	pub const fn is_not_zero(&self) -> bool {
		self.val != 0
	}

	/// The most significant bit, i.e. the bit shifted out by a left shift.
	#[inline]
	pub const fn high_bit(self) -> bool {
		(self.val >> (Self::BITS - 1)) != 0
	}

	/// The least significant bit, i.e. the bit shifted out by a right shift.
	#[inline]
	pub const fn low_bit(self) -> bool {
		(self.val & 1) != 0
	}

	/// Returns:
	///     (value, carry)
	/// Where:
	///     value = (a + b + carry) % 2**BITS
	///     carry = (a + b + carry) > MAX
	#[inline]
	pub const fn addc(a: Limb, b: Limb, carry: bool) -> (Limb, bool) {
		let (sum, overflow1) = a.val.overflowing_add(b.val);
		let (sum, overflow2) = sum.overflowing_add(carry as Value);
		(Limb { val: sum }, overflow1 | overflow2)
	}
}

impl std::ops::BitOr for Limb {
	type Output = Self;

	#[inline]
	fn bitor(self, rhs: Self) -> Self {
		Self { val: self.val | rhs.val }
	}
}

impl std::ops::Shl<usize> for Limb {
	type Output = Self;

	#[inline]
	fn shl(self, rhs: usize) -> Self {
		Self { val: self.val << rhs }
	}
}

impl std::ops::Shr<usize> for Limb {
	type Output = Self;

	#[inline]
	fn shr(self, rhs: usize) -> Self {
		Self { val: self.val >> rhs }
	}
}

impl std::cmp::PartialEq<Value> for Limb {
	#[inline]
	fn eq(&self, other: &Value) -> bool {
		self.val == *other
	}
}
