mod map;
mod quest;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use map::MapView;
pub use quest::QuestView;
pub use state::ViewError;
