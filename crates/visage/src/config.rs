/// Configuration for building a [`Library`](crate::Library).
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Which bundle directory holds which category, in catalog order.
    pub layout: visage_assets::CatalogLayout,
    /// How bundle entries are filtered and how bad entries are handled.
    pub load: visage_assets::LoadSettings,
    /// Where random indices come from.
    pub random: RandomMode,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn layout(mut self, layout: visage_assets::CatalogLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn load(mut self, load: visage_assets::LoadSettings) -> Self {
        self.load = load;
        self
    }

    pub fn random(mut self, random: RandomMode) -> Self {
        self.random = random;
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RandomMode {
    /// One shared generator, seeded from the operating system
    #[default]
    Entropy,
    /// One shared generator with a fixed seed, for reproducible sequences
    Seeded(u64),
    /// A generator per thread, no shared state
    ThreadLocal,
}
