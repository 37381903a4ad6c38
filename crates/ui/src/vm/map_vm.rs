use quest_core::model::PhaseId;
use services::{PhaseStatus, ProgressionEngine};

// Percent offsets of the region nodes, walked in phase order.
const NODE_POSITIONS: [(u32, u32); 8] = [
    (15, 75),
    (35, 55),
    (25, 35),
    (50, 25),
    (70, 35),
    (85, 50),
    (75, 70),
    (55, 85),
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapNodeVm {
    pub phase: PhaseId,
    pub icon: String,
    pub label: String,
    pub status: PhaseStatus,
    pub x: u32,
    pub y: u32,
    /// Hidden for locked regions.
    pub progress_percent: Option<u32>,
}

impl MapNodeVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        match self.status {
            PhaseStatus::Locked => "map-node locked",
            PhaseStatus::Current => "map-node current",
            PhaseStatus::Completed => "map-node completed",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapPathVm {
    pub from: (u32, u32),
    pub to: (u32, u32),
    pub reached: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorldMapVm {
    pub title: String,
    pub subtitle: String,
    pub nodes: Vec<MapNodeVm>,
    pub paths: Vec<MapPathVm>,
}

fn position(index: usize) -> (u32, u32) {
    NODE_POSITIONS[index % NODE_POSITIONS.len()]
}

#[must_use]
pub fn map_world(engine: &ProgressionEngine) -> WorldMapVm {
    let status = engine.world_map_status();
    let catalog = engine.catalog();

    let nodes: Vec<MapNodeVm> = status
        .entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            let phase = catalog.phase(entry.phase)?;
            let (x, y) = position(index);
            Some(MapNodeVm {
                phase: entry.phase,
                icon: phase.icon().to_string(),
                label: phase.short_name().to_string(),
                status: entry.status,
                x,
                y,
                progress_percent: (entry.status != PhaseStatus::Locked).then(|| entry.percent()),
            })
        })
        .collect();

    let paths = nodes
        .windows(2)
        .map(|pair| MapPathVm {
            from: (pair[0].x, pair[0].y),
            to: (pair[1].x, pair[1].y),
            reached: pair[1].status != PhaseStatus::Locked,
        })
        .collect();

    WorldMapVm {
        title: "Realm Map".to_string(),
        subtitle: format!(
            "{}/{} quests completed",
            status.completed_lessons, status.total_lessons
        ),
        nodes,
        paths,
    }
}
