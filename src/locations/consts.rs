/// Inverse of 10^7, the fixed-point factor of E7-encoded degrees.
pub const SCALAR_E7: f64 = 0.0000001;
