/// Marker trait for state objects.
///
/// States are cloned rather than mutated in place and compared to detect
/// changes worth re-rendering.
pub trait ViewState: Clone + PartialEq + Default + Send + 'static {}
