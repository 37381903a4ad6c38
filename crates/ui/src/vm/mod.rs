mod hud_vm;
mod map_vm;
mod quest_vm;

#[cfg(test)]
pub(crate) mod test_support;

pub use hud_vm::{HudVm, PhaseCardVm, map_hud, map_phase_card};
pub use map_vm::{MapNodeVm, MapPathVm, WorldMapVm, map_world};
pub use quest_vm::{
    FeedbackVm, OptionState, OptionVm, PhaseTransitionVm, QuestCardVm, QuestIntent,
    QuestScreenVm, VictoryVm, map_quest_card, map_quest_screen, map_transition, map_victory,
    option_letter, rank_message,
};
