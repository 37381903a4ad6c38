use services::ProgressionEngine;

/// Level badge, XP bar and streak counter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HudVm {
    pub level_label: String,
    pub xp_label: String,
    pub total_xp_label: String,
    pub bar_percent: u32,
    pub streak_label: String,
}

#[must_use]
pub fn map_hud(engine: &ProgressionEngine) -> HudVm {
    let progress = engine.level_progress();
    HudVm {
        level_label: format!("Level {}", progress.level),
        xp_label: format!("{} / {}", progress.xp_into_level, progress.xp_per_level),
        total_xp_label: format!("{} XP", progress.xp),
        bar_percent: progress.percent,
        streak_label: format!("Streak: {}", engine.streak()),
    }
}

/// Banner for the phase the player is in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhaseCardVm {
    pub heading: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub progress_label: String,
    pub percent: u32,
}

#[must_use]
pub fn map_phase_card(engine: &ProgressionEngine) -> PhaseCardVm {
    let progress = engine.phase_progress();
    let phase = engine.current_phase();
    PhaseCardVm {
        heading: format!(
            "PHASE {}, LESSON {}",
            progress.phase, progress.lesson_in_phase
        ),
        name: phase.name().to_string(),
        description: phase.description().to_string(),
        icon: phase.icon().to_string(),
        progress_label: format!(
            "{} of {} lessons completed",
            progress.completed, progress.total
        ),
        percent: progress.percent,
    }
}
