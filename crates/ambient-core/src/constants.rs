use std::time::Duration;

// Shared tuning constants for the ambient background renderers. Keeping them
// in one place keeps magic numbers out of the update loops.

// Constellation field
pub const NODE_COUNT: usize = 30;
pub const NODE_SPEED_MAX: f32 = 0.15; // px per frame, per axis
pub const NODE_RADIUS_MIN: f32 = 2.0;
pub const NODE_RADIUS_SPAN: f32 = 1.0;
pub const LINK_DISTANCE: f32 = 110.0; // px threshold for drawing an edge
pub const LINK_ALPHA_SCALE: f32 = 0.6;
pub const LINK_WIDTH: f32 = 1.0;
pub const LINK_WIDTH_HIGHLIGHT: f32 = 1.4;
pub const HIGHLIGHT_RADIUS: f32 = 4.0; // px the highlighted node flares toward
pub const HIGHLIGHT_DURATION_SEC: f64 = 1.0;
pub const HIGHLIGHT_RISE_FRACTION: f64 = 0.2; // leading slice of the pulse spent rising
pub const POINTER_PICK_RADIUS: f32 = 60.0;
pub const PARALLAX_RANGE: f32 = 15.0; // max node-field offset, px

// Aurora wave field
pub const WAVE_TIME_STEP: f32 = 0.01; // phase advance per frame
pub const WAVE_SAMPLE_STEP: f32 = 2.0; // horizontal sampling interval, px
pub const WAVE_LINE_WIDTH: f32 = 3.0;
pub const WAVE_GLOW_WIDTH: f32 = 7.0;
pub const WAVE_GLOW_ALPHA: f32 = 0.5; // glow underlay alpha relative to the layer
pub const RAY_COUNT: usize = 6;
pub const RAY_SWEEP_SEC: f32 = 24.0; // one full left-to-right sweep
pub const RAY_DELAY_STEP_SEC: f32 = 4.0; // per-ray start offset = index * step

// Radar sweep
pub const RADAR_PERIOD_SEC: f64 = 6.0; // full wedge revolution
pub const RADAR_WEDGE_SWEEP_DEG: f32 = 30.0;
pub const RADAR_VIEW_UNITS: f32 = 100.0; // normalized viewBox extent
pub const RADAR_RING_RADII: [f32; 2] = [45.0, 65.0];
pub const RADAR_RING_WIDTH: f32 = 0.3;
pub const BLIP_COUNT: usize = 6;
pub const BLIP_INTERVAL: Duration = Duration::from_millis(1200);
pub const BLIP_BASE_RADIUS: f32 = 3.0;
pub const BLIP_PEAK_SCALE: f32 = 1.8;
pub const BLIP_PHASE_SEC: f64 = 0.4; // rise duration; fall matches
pub const RADAR_PARALLAX_FACTOR: f32 = 0.03;
pub const RADAR_PARALLAX_EASE_SEC: f32 = 0.4;

// Scroll choreography
pub const DRIFT_HALF_CYCLE_SEC: f32 = 3.0;
pub const DRIFT_Y_RANGE: f32 = 8.0; // px
pub const DRIFT_ROT_RANGE: f32 = 4.0; // degrees
pub const CONVERGE_END: f32 = 0.4; // phase boundaries within pinned progress
pub const STACK_END: f32 = 0.7;
pub const STACK_Y_OFFSET: f32 = 15.0;
pub const PIN_FRACTION_HERO: f32 = 0.8; // pinned extent as a fraction of viewport height
pub const PIN_FRACTION_STORY: f32 = 0.7;

// Responsive surface
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(200);

// Site palette, premultiplied to [0, 1] floats
pub const LINK_COLOR: [f32; 4] = [0.627, 0.773, 0.682, 1.0]; // #A0C5AE
pub const NODE_COLOR: [f32; 4] = [0.463, 0.624, 0.604, 1.0]; // #769F9A
pub const NODE_HIGHLIGHT_COLOR: [f32; 4] = [0.353, 0.510, 0.494, 1.0]; // #5A827E
pub const RADAR_RING_COLOR: [f32; 4] = [0.255, 0.380, 0.361, 0.35]; // #41615C
pub const RADAR_WEDGE_COLOR: [f32; 4] = [0.627, 0.773, 0.682, 0.28]; // #A0C5AE
pub const BLIP_COLOR: [f32; 4] = [0.518, 0.682, 0.573, 1.0]; // #84AE92
pub const AURORA_TOP_COLOR: [f32; 4] = [0.043, 0.055, 0.122, 1.0];
pub const AURORA_BOTTOM_COLOR: [f32; 4] = [0.110, 0.090, 0.231, 1.0];
