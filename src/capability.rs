//! Collaborators the core depends on but does not implement.
//!
//! A camera, a keyboard wedge, or a test script can all be a
//! [`BarcodeSource`]; a screen list or a printed table can be a [`TallyView`].

use crate::model::TallyEntry;

/// Produces a barcode value when the user completes a scan.
///
/// Format validation (EAN-8 / EAN-13 shape and check digit) belongs to the
/// implementor; the core matches whatever string it receives.
pub trait BarcodeSource {
    /// Block until a scan completes. `None` means the user gave up.
    fn next_scan(&mut self) -> Option<String>;
}

/// Renders the current tally list.
pub trait TallyView {
    fn render(&mut self, tallies: &[TallyEntry]);
}

/// Replays a fixed sequence of codes.
impl<I> BarcodeSource for I
where
    I: Iterator<Item = String>,
{
    fn next_scan(&mut self) -> Option<String> {
        self.next()
    }
}
