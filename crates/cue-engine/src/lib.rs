pub mod api;
pub mod core;
pub mod input;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::game::{EngineContext, Game, GameConfig};
pub use api::types::{GameEvent, SoundEvent};
pub use crate::core::geometry::{
    closest_point_on_segment, march_circle, march_ray, march_segment, point_segment_distance,
    project_onto_ray, reflect, Segment,
};
pub use crate::core::time::FixedTimestep;
pub use input::queue::{InputEvent, InputQueue, PointerState};
pub use systems::draw::{dash_segments, Color, DrawCommand, DrawList, DrawPrimitive};
