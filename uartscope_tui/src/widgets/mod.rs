mod command_line;
mod key_maps;
mod log_view;
mod timing_diagram;

pub use command_line::CommandLine;
pub use command_line::CommandLineState;
pub use key_maps::KeyDesc;
pub use key_maps::KeyId;
pub use key_maps::KeyMapHelpBar;
pub use key_maps::KeyMaps;
pub use log_view::LogView;
pub use timing_diagram::TimingDiagram;
