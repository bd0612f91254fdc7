/// Defines the directory where the calibration output files are saved
pub const DEFAULT_OUT_DIR: &str = "/tmp/bcjsim/results";

/// Defines an auxiliary directory where the test result files are saved
pub const DEFAULT_TEST_DIR: &str = "/tmp/bcjsim/test";

/// Defines the default number of increments of a calibration run
pub const DEFAULT_INCREMENT_COUNT: usize = 200;

/// Defines the default factor converting dataset stresses (MPa) into model stresses (Pa)
pub const DEFAULT_STRESS_SCALE: f64 = 1_000_000.0;

/// Lateral contraction ratio of the uniaxial tension path (near-isochoric)
pub const LATERAL_CONTRACTION: f64 = 0.499;

/// Seed value of every backstress component at the initial state
pub const INITIAL_BACKSTRESS: f64 = 0.0000001;

/// √(2/3)
pub const SQRT_2_BY_3: f64 = 0.816496580927726;

/// √3
pub const SQRT_3: f64 = 1.7320508075688772;

/// 2/3
pub const TWO_BY_3: f64 = 2.0 / 3.0;
