// Platform-free behavior shared by the DOM wiring; tested on the host.
pub mod menu;
pub mod parallax;
pub mod perf;
pub mod scroll;
pub mod twinkle;
