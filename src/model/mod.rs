pub use arena_core::{Arena, ArenaEvent, Phase};
pub mod arena {
    pub use arena_core::arena::*;
}
pub mod config {
    pub use arena_core::config::*;
}
pub mod data {
    pub use arena_data::*;
}
pub mod events {
    pub use arena_core::events::*;
}
pub mod lifecycle {
    pub use arena_core::lifecycle::*;
}
pub mod metrics {
    pub use arena_core::metrics::*;
}
pub mod persistence {
    pub use arena_io::persistence::*;
}
pub mod snapshot {
    pub use arena_core::snapshot::*;
}
pub mod systems {
    pub use arena_core::systems::*;
}
