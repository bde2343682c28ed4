use alloy_primitives::U256;

/// One ray, the protocol's 27-decimal fixed-point unit.
pub const RAY: f64 = 1e27;

const TWO_POW_64: f64 = 18_446_744_073_709_551_616.0;

/// Converts a ray-scaled rate into a percentage.
///
/// Total over the whole `U256` range; narrowing to `f64` loses precision
/// far below anything visible in a rate display.
pub fn to_percent(rate: U256) -> f64 {
    to_f64(rate) / RAY * 100.0
}

fn to_f64(value: U256) -> f64 {
    value
        .as_limbs()
        .iter()
        .rev()
        .fold(0.0, |acc, &limb| acc * TWO_POW_64 + limb as f64)
}
