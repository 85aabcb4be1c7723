pub mod afm_wave;
pub mod generator;
pub mod params;
pub mod waveform;

pub use self::afm_wave::*;
pub use self::generator::*;
pub use self::params::*;
pub use self::waveform::*;
