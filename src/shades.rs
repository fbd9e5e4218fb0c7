// SPDX-License-Identifier: MPL-2.0

//! Sample data for the showcase page: named shades of green.

use crate::widgets::chip_group::Chip;
use cosmic::iced::Color;
use rand::seq::SliceRandom;

/// A named color shown as a chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shade {
    pub name: &'static str,
    pub hex: &'static str,
}

const fn shade(name: &'static str, hex: &'static str) -> Shade {
    Shade { name, hex }
}

impl Shade {
    /// Parses the `#RRGGBB` code.
    pub fn color(&self) -> Option<Color> {
        let digits = self.hex.strip_prefix('#')?;
        if digits.len() != 6 {
            return None;
        }
        let channel = |at: usize| u8::from_str_radix(digits.get(at..at + 2)?, 16).ok();
        Some(Color::from_rgb8(channel(0)?, channel(2)?, channel(4)?))
    }
}

/// Every shade the showcase knows about.
pub const SHADES: &[Shade] = &[
    shade("Emerald", "#50C878"),
    shade("Jade", "#00A86B"),
    shade("Olive", "#808000"),
    shade("Lime", "#32CD32"),
    shade("Mint", "#98FF98"),
    shade("Sage", "#B2AC88"),
    shade("Forest", "#228B22"),
    shade("Pine", "#01796F"),
    shade("Moss", "#8A9A5B"),
    shade("Fern", "#4F7942"),
    shade("Chartreuse", "#7FFF00"),
    shade("Teal", "#008080"),
    shade("Avocado", "#568203"),
    shade("Pistachio", "#93C572"),
    shade("Seafoam", "#9FE2BF"),
    shade("Juniper", "#3A5F4B"),
    shade("Basil", "#579229"),
    shade("Shamrock", "#009E60"),
    shade("Kelly", "#4CBB17"),
    shade("Hunter", "#355E3B"),
    shade("Malachite", "#0BDA51"),
    shade("Viridian", "#40826D"),
    shade("Celadon", "#ACE1AF"),
    shade("Asparagus", "#87A96B"),
    shade("Pear", "#D1E231"),
    shade("Artichoke", "#8F9779"),
    shade("Laurel", "#A9BA9D"),
    shade("Myrtle", "#21421E"),
    shade("Sap", "#507D2A"),
    shade("Spring bud", "#A7FC00"),
    shade("Tea green", "#D0F0C0"),
    shade("Honeydew", "#F0FFF0"),
    shade("Matcha 抹茶", "#8DB255"),
    shade("Harlequin", "#3FFF00"),
    shade("Castleton", "#00563F"),
    shade("Dartmouth", "#00703C"),
];

/// How many shades the showcase starts with.
pub const INITIAL_COUNT: usize = 24;

/// Builds a chip for a shade. The shade name doubles as the chip id.
pub fn chip(shade: Shade) -> Chip<Shade> {
    Chip::new(shade.name, shade.name, shade)
}

/// The first `count` shades in random order.
pub fn shuffled(count: usize) -> Vec<Chip<Shade>> {
    let mut chips: Vec<Chip<Shade>> = SHADES.iter().copied().take(count).map(chip).collect();
    shuffle(&mut chips);
    chips
}

/// Puts chips in random order.
pub fn shuffle(chips: &mut [Chip<Shade>]) {
    chips.shuffle(&mut rand::rng());
}

/// The first shade that is not already shown.
pub fn next_unused(chips: &[Chip<Shade>]) -> Option<Shade> {
    SHADES
        .iter()
        .copied()
        .find(|shade| chips.iter().all(|chip| chip.data != *shade))
}
