// Accent theme.
// One accent color is picked at random when the app starts and used for
// borders, highlights, and the toast progress bar.

use rand::Rng;
use ratatui::style::Color;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub accent: Color,
}

impl Theme {
    /// Pick a random accent. Channels are floored so the color stays
    /// readable against the dark default background.
    pub fn random() -> Self {
        let mut rng = rand::rng();
        let accent = Color::Rgb(
            rng.random_range(0x50..=0xff),
            rng.random_range(0x50..=0xff),
            rng.random_range(0x50..=0xff),
        );
        Theme { accent }
    }

    /// Fixed fallback accent, used by tests and non-interactive contexts.
    pub fn plain() -> Self {
        Theme {
            accent: Color::Cyan,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_accent_stays_above_floor() {
        for _ in 0..64 {
            let theme = Theme::random();
            match theme.accent {
                Color::Rgb(r, g, b) => {
                    assert!(r >= 0x50 && g >= 0x50 && b >= 0x50);
                }
                other => panic!("expected an RGB accent, got {other:?}"),
            }
        }
    }
}
