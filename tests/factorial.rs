use limbint::{BigInt, Limb};

/// Accumulates `n!` the way the console driver does: start from 1, multiply
/// by each scalar in turn, replace the accumulator every iteration.
fn factorial(n: u64) -> BigInt {
	let mut number = BigInt::try_from_u64(1).unwrap();
	for i in 2..=n {
		number = number.try_mul_u64(i).unwrap();
	}
	number
}

fn magnitude(a: &BigInt) -> u128 {
	let mut value: u128 = 0;
	for limb in a.as_limbs().iter().rev() {
		value = (value << Limb::BITS) | (limb.val as u128);
	}
	value
}

fn hex_string(a: &BigInt) -> String {
	let mut out = Vec::new();
	a.print_hex(&mut out).unwrap();
	String::from_utf8(out).unwrap()
}

#[test]
fn factorial_of_5() {
	let result = factorial(5);
	assert_eq!(magnitude(&result), 120);
	if Limb::BITS == 8 {
		assert_eq!(hex_string(&result), "0x78");
	}
}

#[test]
fn factorial_of_10() {
	let result = factorial(10);
	assert_eq!(magnitude(&result), 3_628_800);
	if Limb::BITS == 8 {
		assert_eq!(hex_string(&result), "0x375F00");
	}
}

#[test]
fn factorial_of_20() {
	let result = factorial(20);
	assert_eq!(magnitude(&result), 2_432_902_008_176_640_000);
}

#[test]
fn factorial_of_0_and_1() {
	assert_eq!(magnitude(&factorial(0)), 1);
	assert_eq!(magnitude(&factorial(1)), 1);
}
