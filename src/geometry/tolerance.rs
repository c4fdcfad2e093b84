// Centralized tolerances and helpers for robust geometry

pub const EPS_LEN: f32 = 1e-6;            // zero-length vector threshold

#[inline]
pub fn norm2(mut x: f32, mut y: f32) -> ((f32,f32), f32) {
    let len = (x*x + y*y).sqrt();
    if len > EPS_LEN { x/=len; y/=len; ((x,y), len) } else { ((0.0,0.0), 0.0) }
}
