use tally::mvi::Reducer;
use tally::reconcile::EditBuffer;
use tally::scan::{ScanIntent, ScanReducer, ScanState};

fn editing(quantity: i64) -> ScanState {
    ScanState::Editing {
        buffer: EditBuffer::new("12345670", quantity),
    }
}

#[test]
fn begin_scan_moves_idle_to_scanning() {
    let state = ScanReducer::reduce(ScanState::Idle, ScanIntent::BeginScan);
    assert!(state.is_scanning());
}

#[test]
fn scanned_opens_edit_buffer() {
    let buffer = EditBuffer::new("12345670", 1);
    let state = ScanReducer::reduce(
        ScanState::Scanning,
        ScanIntent::Scanned {
            buffer: buffer.clone(),
        },
    );
    assert_eq!(state.buffer(), Some(&buffer));
}

#[test]
fn scan_while_editing_keeps_current_buffer() {
    let state = ScanReducer::reduce(
        editing(4),
        ScanIntent::Scanned {
            buffer: EditBuffer::new("99999999", 1),
        },
    );
    assert_eq!(state, editing(4));
}

#[test]
fn aborted_scan_returns_to_idle() {
    let state = ScanReducer::reduce(ScanState::Scanning, ScanIntent::ScanAborted);
    assert!(state.is_idle());
}

#[test]
fn increment_and_decrement_are_unbounded() {
    let mut state = editing(1);
    for _ in 0..3 {
        state = ScanReducer::reduce(state, ScanIntent::Decrement);
    }
    assert_eq!(state.buffer().map(|b| b.quantity), Some(-2));

    state = ScanReducer::reduce(state, ScanIntent::Increment);
    assert_eq!(state.buffer().map(|b| b.quantity), Some(-1));
}

#[test]
fn rename_and_set_quantity_edit_buffer() {
    let state = ScanReducer::reduce(
        editing(1),
        ScanIntent::Rename {
            name: "Rice 1kg".to_string(),
        },
    );
    let state = ScanReducer::reduce(state, ScanIntent::SetQuantity { quantity: 12 });
    let buffer = state.buffer().unwrap();
    assert_eq!(buffer.name, "Rice 1kg");
    assert_eq!(buffer.quantity, 12);
}

#[test]
fn edits_outside_editing_are_ignored() {
    let state = ScanReducer::reduce(ScanState::Idle, ScanIntent::Increment);
    assert!(state.is_idle());
    let state = ScanReducer::reduce(ScanState::Scanning, ScanIntent::Rename { name: "x".into() });
    assert!(state.is_scanning());
}

#[test]
fn saved_always_clears_buffer() {
    let existing = ScanState::Editing {
        buffer: EditBuffer {
            id: 3,
            ..EditBuffer::new("12345670", 2)
        },
    };
    assert!(ScanReducer::reduce(existing, ScanIntent::Saved).is_idle());
    assert!(ScanReducer::reduce(editing(1), ScanIntent::Saved).is_idle());
}

#[test]
fn cancel_discards_buffer() {
    assert!(ScanReducer::reduce(editing(5), ScanIntent::Cancel).is_idle());
}
