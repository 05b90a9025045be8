mod command_interpreter;
mod root;
mod wave_viewer;

pub use command_interpreter::CommandInterpreter;
pub use root::Root;
pub use wave_viewer::WaveViewer;
