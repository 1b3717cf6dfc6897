pub mod angle;
pub mod constants;
pub mod elements;
pub mod epoch;
mod events;
pub mod frame;
pub mod kepler;
pub mod photometry;
pub mod planet;
pub mod series;
pub mod synodic_errors;
mod vsop87;
