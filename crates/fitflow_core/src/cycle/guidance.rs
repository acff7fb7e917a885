//! Phase-specific workout and diet copy.

use crate::model::cycle::CyclePhase;

/// Workout suggestion for the phase, or general copy without cycle data.
pub fn workout_tip(phase: Option<CyclePhase>) -> &'static str {
    match phase {
        None => "We'll suggest general gentle vs stronger days once you add more cycle details.",
        Some(CyclePhase::Menstrual) => {
            "On bleed days, keep movement soft: walks, mobility flows and breath-led stretches work well."
        }
        Some(CyclePhase::Follicular) => {
            "This is often a high-energy window, which can be a good time for strength and slightly heavier sessions."
        }
        Some(CyclePhase::Ovulatory) => {
            "You may feel powerful here. If it feels good, lean into slightly more intense or performance-focused work."
        }
        Some(CyclePhase::Luteal) => {
            "Late luteal days can feel more sensitive. Low impact, grounding movement and more rest usually feel best."
        }
    }
}

/// Diet suggestion for the phase, or general copy without cycle data.
pub fn diet_tip(phase: Option<CyclePhase>) -> &'static str {
    match phase {
        None => "Aim for steady blood sugar, hydration and iron-rich meals across your month.",
        Some(CyclePhase::Menstrual) => {
            "During your bleed, focus on iron-rich meals, warm foods and steady hydration to support energy."
        }
        Some(CyclePhase::Follicular) => {
            "In this building phase, protein and colourful plants support recovery and lean muscle."
        }
        Some(CyclePhase::Ovulatory) => {
            "Around ovulation, lighter, fresh meals can feel good if your appetite changes."
        }
        Some(CyclePhase::Luteal) => {
            "In the luteal phase, fibre, protein and healthy fats help reduce big blood sugar swings and cravings."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{diet_tip, workout_tip};
    use crate::model::cycle::CyclePhase;

    #[test]
    fn every_phase_has_distinct_copy() {
        let phases = [
            None,
            Some(CyclePhase::Menstrual),
            Some(CyclePhase::Follicular),
            Some(CyclePhase::Ovulatory),
            Some(CyclePhase::Luteal),
        ];
        for (index, phase) in phases.iter().enumerate() {
            for other in &phases[index + 1..] {
                assert_ne!(workout_tip(*phase), workout_tip(*other));
                assert_ne!(diet_tip(*phase), diet_tip(*other));
            }
        }
    }

    #[test]
    fn menstrual_copy_mentions_iron() {
        assert!(diet_tip(Some(CyclePhase::Menstrual)).contains("iron"));
    }
}
