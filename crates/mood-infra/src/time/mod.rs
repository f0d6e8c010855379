mod timer;

pub use timer::TokioTimer;
