pub mod base;
pub mod complex;
pub mod energy;
pub mod ensemble;
pub mod fold;
pub mod macrostate;
pub mod report;
pub mod simulate;

/// dimensional analysis types
pub type Energy = f64;
pub type Rate = f64;
pub type Time = f64;
pub type Probability = f64;
pub type StrandId = usize;

/// Boltzmann constant, kcal/(mol K)
pub const KB: Energy = 0.001987204285;
/// 0 degrees Celsius in Kelvin
pub const K0: f64 = 273.15;

// kinetic defaults, per-event
const K_UNI: Rate = 1e6;
const K_JOIN: Rate = 1e6;

// secondary structure constraints
const MIN_HAIRPIN: usize = 3;

/// trait for random generation, mainly (strictly?) for testing
pub trait Arbitrary {
    fn random() -> Self;
}

/// initialize terminal logging for binaries
pub fn init() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
