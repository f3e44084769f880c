use crate::mvi::ViewState;
use crate::reconcile::EditBuffer;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ScanState {
    #[default]
    Idle,
    Scanning,
    Editing {
        buffer: EditBuffer,
    },
}

impl ViewState for ScanState {}

impl ScanState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_scanning(&self) -> bool {
        matches!(self, Self::Scanning)
    }

    pub fn buffer(&self) -> Option<&EditBuffer> {
        match self {
            Self::Editing { buffer } => Some(buffer),
            _ => None,
        }
    }
}
