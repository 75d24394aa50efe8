use crate::domain::portfolio::AllocationPlan;

/// Maps a 0..=100 risk score onto a three-tier asset allocation.
pub fn determine_asset_allocation(risk_score: u8) -> AllocationPlan {
    match risk_score {
        // Conservative
        0..=39 => AllocationPlan {
            equity: 0.40,
            debt: 0.55,
            alternatives: 0.05,
        },
        // Moderate
        40..=69 => AllocationPlan {
            equity: 0.60,
            debt: 0.35,
            alternatives: 0.05,
        },
        // Aggressive
        _ => AllocationPlan {
            equity: 0.70,
            debt: 0.25,
            alternatives: 0.05,
        },
    }
}
