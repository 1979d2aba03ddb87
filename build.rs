//! Selects the limb width at build time.
//!
//! The `LIMBINT_LIMB_BITS` environment variable may be set to 8, 16, 32 or 64.
//! 64 is only accepted on targets with 64-bit pointers. Any other value,
//! including an unset variable, silently falls back to 8.

use std::env;

fn main() {
	println!("cargo:rerun-if-env-changed=LIMBINT_LIMB_BITS");
	println!("cargo:rustc-check-cfg=cfg(limb_bits, values(\"8\", \"16\", \"32\", \"64\"))");

	let requested = env::var("LIMBINT_LIMB_BITS").unwrap_or_default();
	let pointer_width = env::var("CARGO_CFG_TARGET_POINTER_WIDTH").unwrap_or_default();

	let bits = match requested.as_str() {
		"16" => "16",
		"32" => "32",
		"64" if pointer_width == "64" => "64",
		_ => "8",
	};
	println!("cargo:rustc-cfg=limb_bits=\"{}\"", bits);
}
