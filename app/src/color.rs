use palette::Srgb;
use sha2::{Digest, Sha256};

pub use palette::named::{BLACK, GRAY, LIGHTGRAY};

pub fn hex(color: Srgb<u8>) -> String {
    format!("#{:02x}{:02x}{:02x}", color.red, color.green, color.blue)
}

fn from_colorous(c: colorous::Color) -> Srgb<u8> {
    Srgb::new(c.r, c.g, c.b)
}

/// Fill colors for the stream bands, one per reference in stacking
/// order. The categorical scheme is cycled when there are more
/// references than colors.
pub fn reference_colors(count: usize) -> Vec<Srgb<u8>> {
    let scheme = colorous::CATEGORY10;
    (0..count)
        .map(|ix| from_colorous(scheme[ix % scheme.len()]))
        .collect()
}

/// Line colors for the samples; hosts normally provide one per
/// sample, anything missing gets a stable color derived from its
/// index.
#[derive(Debug, Default, Clone)]
pub struct SampleColors {
    colors: Vec<Srgb<u8>>,
}

impl SampleColors {
    pub fn new(colors: Vec<Srgb<u8>>) -> Self {
        Self { colors }
    }

    pub fn get(&self, sample: usize) -> Srgb<u8> {
        if let Some(color) = self.colors.get(sample) {
            return *color;
        }

        log::warn!("no color given for sample {sample}, using a hashed one");
        Self::fallback(sample)
    }

    // channels are scaled to 0..=191 so the line stays visible on the
    // light plot background
    fn fallback(sample: usize) -> Srgb<u8> {
        let digest = Sha256::digest((sample as u64).to_le_bytes());
        let channel = |b: u8| (b as u16 * 3 / 4) as u8;
        Srgb::new(channel(digest[0]), channel(digest[1]), channel(digest[2]))
    }
}
