use serde::{Deserialize, Serialize};

/// Etapa de la tarima in the entry pipeline.
///
/// The remote API stores the stage as a small integer; codes outside the
/// known set are kept verbatim so a newer backend does not break parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum PalletStatus {
    Received,
    LocationAssigned,
    RegisteredInErp,
    Reprocessing,
    Unknown(i32),
}

impl PalletStatus {
    pub fn code(&self) -> i32 {
        match self {
            PalletStatus::Received => 1,
            PalletStatus::LocationAssigned => 2,
            PalletStatus::RegisteredInErp => 3,
            PalletStatus::Reprocessing => 4,
            PalletStatus::Unknown(code) => *code,
        }
    }

    pub fn display_name(&self) -> String {
        match self {
            PalletStatus::Received => "Recibida".to_string(),
            PalletStatus::LocationAssigned => "Ubicación asignada".to_string(),
            PalletStatus::RegisteredInErp => "Registrada en ERP".to_string(),
            PalletStatus::Reprocessing => "Reproceso".to_string(),
            PalletStatus::Unknown(code) => format!("Estatus {}", code),
        }
    }

    /// Known stages in pipeline order.
    pub fn all() -> Vec<PalletStatus> {
        vec![
            PalletStatus::Received,
            PalletStatus::LocationAssigned,
            PalletStatus::RegisteredInErp,
            PalletStatus::Reprocessing,
        ]
    }

    /// A pallet can be sent to rework unless it is already there.
    pub fn can_mark_reprocessing(&self) -> bool {
        !matches!(self, PalletStatus::Reprocessing)
    }
}

impl From<i32> for PalletStatus {
    fn from(code: i32) -> Self {
        match code {
            1 => PalletStatus::Received,
            2 => PalletStatus::LocationAssigned,
            3 => PalletStatus::RegisteredInErp,
            4 => PalletStatus::Reprocessing,
            other => PalletStatus::Unknown(other),
        }
    }
}

impl From<PalletStatus> for i32 {
    fn from(status: PalletStatus) -> Self {
        status.code()
    }
}

impl Default for PalletStatus {
    fn default() -> Self {
        PalletStatus::Received
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        for status in PalletStatus::all() {
            assert_eq!(PalletStatus::from(status.code()), status);
        }
        assert_eq!(PalletStatus::from(4), PalletStatus::Reprocessing);
    }

    #[test]
    fn test_unknown_code_is_preserved() {
        let status: PalletStatus = serde_json::from_str("9").unwrap();
        assert_eq!(status, PalletStatus::Unknown(9));
        assert_eq!(serde_json::to_string(&status).unwrap(), "9");
        assert_eq!(status.display_name(), "Estatus 9");
    }

    #[test]
    fn test_reprocessing_is_terminal_for_rework() {
        assert!(PalletStatus::RegisteredInErp.can_mark_reprocessing());
        assert!(!PalletStatus::Reprocessing.can_mark_reprocessing());
    }
}
