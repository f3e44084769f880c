use crate::mvi::Intent;
use crate::reconcile::EditBuffer;

#[derive(Debug, Clone)]
pub enum ScanIntent {
    /// User opened the scanner.
    BeginScan,
    /// Scanner produced a code. The buffer was already resolved by
    /// [`lookup`](crate::reconcile::lookup) at the moment of the scan.
    Scanned { buffer: EditBuffer },
    /// Scanner closed without producing a code.
    ScanAborted,
    Increment,
    Decrement,
    SetQuantity { quantity: i64 },
    Rename { name: String },
    /// The buffer was committed. Always clears it.
    Saved,
    /// Discard the buffer without committing.
    Cancel,
}

impl Intent for ScanIntent {}
