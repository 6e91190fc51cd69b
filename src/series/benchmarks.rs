/// Illustrative frame rates shown on the benchmark slide.
///
/// The table is fixed marketing copy: it is the same for every build and is not measured or
/// derived from the components.
pub const ILLUSTRATIVE_BENCHMARKS: [Benchmark; 8] = [
    Benchmark::new("CS2", 199),
    Benchmark::new("PUBG: BATTLEGROUNDS", 221),
    Benchmark::new("Cyberpunk 2077", 115),
    Benchmark::new("COD: Warzone", 122),
    Benchmark::new("Indiana Jones", 91),
    Benchmark::new("RUST", 113),
    Benchmark::new("DOOM The Dark Ages", 73),
    Benchmark::new("Hogwarts Legacy", 97),
];

/// One game and its displayed frame rate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Benchmark {
    pub game: &'static str,
    pub fps: u32,
}

impl Benchmark {
    pub const fn new(game: &'static str, fps: u32) -> Self {
        Self { game, fps }
    }

    /// Frame-rate label, e.g. `199 FPS`.
    pub fn fps_label(&self) -> String {
        format!("{} FPS", self.fps)
    }
}
