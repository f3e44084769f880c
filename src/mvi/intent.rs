/// Marker trait for intent objects.
///
/// Intents represent user actions (button presses, text edits) and
/// capability events (a completed scan). Reducers consume them.
pub trait Intent: Send + 'static {}
