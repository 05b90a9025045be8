pub mod error;
pub mod explanation;
pub mod generator;
pub mod renderer;
pub mod segment;
pub mod surface;

pub use error::{UartError, UartResult};
pub use explanation::Explanation;
pub use generator::{binary_string, generate, generate_byte};
pub use renderer::{LabelMode, Phase, RenderOptions, Renderer};
pub use segment::{Color, Level, Segment, WaveformSequence};
pub use surface::{Label, LabelId, Plot, Point, Surface};
