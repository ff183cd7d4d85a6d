/// Alias to a scalar floating type.
///
/// NOTE: distances, times and energy levels are real valued and compared against time windows and
/// battery bounds, so `f64` is used to keep simulation drift small.
pub type Float = f64;
