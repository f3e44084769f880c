use crate::mvi::Reducer;
use crate::scan::intent::ScanIntent;
use crate::scan::state::ScanState;

pub struct ScanReducer;

impl Reducer for ScanReducer {
    type State = ScanState;
    type Intent = ScanIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ScanIntent::BeginScan => match state {
                ScanState::Idle => ScanState::Scanning,
                other => other,
            },
            ScanIntent::Scanned { buffer } => match state {
                ScanState::Idle | ScanState::Scanning => ScanState::Editing { buffer },
                // An edit is already open; a stray scan must not clobber it
                other => other,
            },
            ScanIntent::ScanAborted => match state {
                ScanState::Scanning => ScanState::Idle,
                other => other,
            },
            ScanIntent::Increment => match state {
                ScanState::Editing { mut buffer } => {
                    buffer.increment();
                    ScanState::Editing { buffer }
                }
                other => other,
            },
            ScanIntent::Decrement => match state {
                ScanState::Editing { mut buffer } => {
                    buffer.decrement();
                    ScanState::Editing { buffer }
                }
                other => other,
            },
            ScanIntent::SetQuantity { quantity } => match state {
                ScanState::Editing { mut buffer } => {
                    buffer.quantity = quantity;
                    ScanState::Editing { buffer }
                }
                other => other,
            },
            ScanIntent::Rename { name } => match state {
                ScanState::Editing { mut buffer } => {
                    buffer.name = name;
                    ScanState::Editing { buffer }
                }
                other => other,
            },
            ScanIntent::Saved | ScanIntent::Cancel => ScanState::Idle,
        }
    }
}
